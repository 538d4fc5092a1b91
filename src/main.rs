fn main() {
    stroll_story::app::cli::run();
}
