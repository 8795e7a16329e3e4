fn main() {
    taskdesk::config::load_dotenv();
    tracing_subscriber::fmt::init();
    dioxus::launch(taskdesk::ui::App);
}
