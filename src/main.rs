fn main() {
    std::process::exit(msgqueue::app::startup::startup());
}
