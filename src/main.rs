fn main() {
    tpm::app::cli::run();
}
