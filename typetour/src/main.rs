use std::io;

fn main() -> anyhow::Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    typetour::run(stdin.lock(), stdout.lock())
}
