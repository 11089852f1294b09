fn main() {
    sls_resolver::app::cli::run();
}
