mod platform;

fn main() {
    platform::run_app()
}
