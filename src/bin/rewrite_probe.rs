//! Posts a sample helpdesk description to a running task desk server and
//! prints the rewritten text.
//!
//! Usage: `rewrite_probe [description]`

use anyhow::{Context, Result, bail};
use taskdesk::config::{AppConfig, load_dotenv};
use taskdesk::http::{HttpClient, HttpError, REWRITE_DESCRIPTION_PATH, ReqwestClient, RequestBody};
use taskdesk::types::{ErrorBody, RewriteResult};

const PLACEHOLDER_DESCRIPTION: &str = "The problem is that those 160 mg rows are referred in the content plan, as it is stated on the Error page. I see that you inactivated them, but in this case you should have deleted the content plan parts before locking and publishing it. As the CP is already locked and published there is nothing we can do, inactivate the rows to show that they were not relevant.";

#[tokio::main]
async fn main() -> Result<()> {
    load_dotenv();
    tracing_subscriber::fmt::init();

    let config = AppConfig::from_env().context("Failed to load configuration")?;
    let description = std::env::args()
        .nth(1)
        .unwrap_or_else(|| PLACEHOLDER_DESCRIPTION.to_string());

    let client = ReqwestClient::new(config.server_url);
    let body = RequestBody::form(&[("description", description.as_str())]);

    match client.post(REWRITE_DESCRIPTION_PATH, body).await {
        Ok(response) => {
            let result: RewriteResult = response.json()?;
            if result.is_success() {
                println!("Rewritten description:");
                println!("{}", result.rewritten_description.unwrap_or_default());
            } else {
                println!("Error: {}", result.message.unwrap_or_default());
            }
            Ok(())
        }
        Err(HttpError::Status { status, body }) => {
            let message = ErrorBody::parse(&body)
                .and_then(|parsed| parsed.message)
                .unwrap_or(body);
            bail!("Received status code {status}: {message}")
        }
        Err(err) => Err(err).context("An error occurred while making the request"),
    }
}
