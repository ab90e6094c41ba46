use clap::Parser;

use conquer_jvm::NativeJvmLoader;
use conquer_launcher_cli::{run_launcher, Args};

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    run_launcher(
        &args,
        &NativeJvmLoader,
        &mut std::io::stdout(),
        &mut std::io::stderr(),
    )?;
    Ok(())
}
