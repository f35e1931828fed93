fn main() {
    if let Err(err) = steproute::run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}
