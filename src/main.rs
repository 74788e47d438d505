fn main() {
    oddsmith::cli::run();
}
