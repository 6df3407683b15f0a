fn main() {
    if let Err(err) = mahjong_wall::run() {
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}
