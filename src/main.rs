fn main() {
    presetgen::run_cli();
}
