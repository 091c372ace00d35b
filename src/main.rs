fn main() {
    panel_roles::app::cli::run();
}
