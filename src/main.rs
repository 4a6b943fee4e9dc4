use clap::Parser;
use dynamic_form::cli::commands::{cmd_interactive, cmd_render, cmd_run, cmd_types};
use dynamic_form::cli::config::{Cli, Commands, load_config, resolve};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref());
    let trace = cli.trace.as_deref();

    match cli.command {
        Commands::Types => cmd_types()?,
        Commands::Render {
            form_type,
            format,
            output,
        } => {
            let resolved = resolve(&config, form_type.as_deref(), format.as_deref(), None, trace);
            cmd_render(&resolved, output.as_deref(), cli.verbose)?;
        }
        Commands::Run {
            script,
            format,
            output,
        } => {
            let resolved = resolve(&config, None, format.as_deref(), None, trace);
            let all_passed = cmd_run(&script, &resolved, output.as_deref(), cli.verbose)?;
            if !all_passed {
                std::process::exit(1);
            }
        }
        Commands::Interactive { form_type, sink } => {
            let resolved = resolve(&config, form_type.as_deref(), None, sink.as_deref(), trace);
            cmd_interactive(&resolved, cli.verbose)?;
        }
    }

    Ok(())
}
