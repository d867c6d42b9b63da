//! CLI entry point for stepup.
//!
//! This module is intentionally thin: it handles argument parsing, I/O, and
//! exit codes. All business logic lives in the `stepup-app` crate.

use anyhow::Context;
use camino::Utf8PathBuf;
use clap::{Parser, Subcommand};
use stepup_app::{
    apply_mutation, decision_exit_code, load_catalog_file, load_state_file, run_decide, run_demo,
    serialize_envelope, state_to_renderable, write_text, DecideInput, Mutation,
};
use stepup_render::{render_decision_text, render_markdown, render_state_text, RenderableDecision};

#[derive(Parser, Debug)]
#[command(
    name = "stepup",
    version,
    about = "Step-up authentication decision engine"
)]
struct Cli {
    /// Path to the catalog TOML (built-in demo catalog if absent).
    #[arg(long, default_value = "stepup.toml")]
    catalog: Utf8PathBuf,

    /// Path to the directory state JSON (built-in demo state if absent).
    #[arg(long, default_value = "state.json")]
    state: Utf8PathBuf,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Evaluate a policy against a session and write the decision envelope.
    Decide {
        /// Session id to evaluate.
        #[arg(long)]
        session: String,

        /// Policy (ACR) name to evaluate against.
        #[arg(long)]
        policy: String,

        /// Pin the evaluation instant (Unix milliseconds) instead of
        /// sampling the wall clock. Useful for reproducible output.
        #[arg(long)]
        now: Option<i64>,

        /// Where to write the JSON decision envelope.
        #[arg(long, default_value = "artifacts/stepup/decision.json")]
        report_out: Utf8PathBuf,

        /// Write a Markdown decision report alongside the JSON.
        #[arg(long)]
        write_markdown: bool,

        /// Where to write the Markdown report (if enabled).
        #[arg(long, default_value = "artifacts/stepup/decision.md")]
        markdown_out: Utf8PathBuf,
    },

    /// Expand all abstract authentication patterns for a policy.
    Patterns {
        /// Policy (ACR) name to expand.
        policy: String,
    },

    /// Print the current catalog and directory state.
    Show,

    /// Record an authentication event on a session.
    Record {
        #[arg(long)]
        session: String,
        #[arg(long)]
        method: String,
        /// Pin the recorded timestamp (Unix milliseconds).
        #[arg(long)]
        now: Option<i64>,
    },

    /// Enroll a user in a method.
    Enroll {
        #[arg(long)]
        user: String,
        #[arg(long)]
        method: String,
    },

    /// Remove a method from a user's enrollments.
    Unenroll {
        #[arg(long)]
        user: String,
        #[arg(long)]
        method: String,
    },

    /// Remove one past action from a session's history by position.
    Revoke {
        #[arg(long)]
        session: String,
        #[arg(long)]
        index: usize,
    },

    /// Run the scripted demo against the current model.
    Demo {
        /// Pin the evaluation instant (Unix milliseconds).
        #[arg(long)]
        now: Option<i64>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.cmd {
        Commands::Decide {
            ref session,
            ref policy,
            now,
            ref report_out,
            write_markdown,
            ref markdown_out,
        } => cmd_decide(
            &cli,
            session,
            policy,
            now,
            report_out.clone(),
            write_markdown,
            markdown_out.clone(),
        ),
        Commands::Patterns { ref policy } => cmd_patterns(&cli, policy),
        Commands::Show => cmd_show(&cli),
        Commands::Record {
            ref session,
            ref method,
            now,
        } => cmd_mutate(
            &cli,
            Mutation::Record {
                session_id: session,
                method_id: method,
            },
            now,
        ),
        Commands::Enroll {
            ref user,
            ref method,
        } => cmd_mutate(
            &cli,
            Mutation::Enroll {
                user_id: user,
                method_id: method,
            },
            None,
        ),
        Commands::Unenroll {
            ref user,
            ref method,
        } => cmd_mutate(
            &cli,
            Mutation::Unenroll {
                user_id: user,
                method_id: method,
            },
            None,
        ),
        Commands::Revoke {
            ref session,
            index,
        } => cmd_mutate(
            &cli,
            Mutation::Revoke {
                session_id: session,
                index,
            },
            None,
        ),
        Commands::Demo { now } => cmd_demo(&cli, now),
    }
}

fn cmd_decide(
    cli: &Cli,
    session: &str,
    policy: &str,
    now: Option<i64>,
    report_out: Utf8PathBuf,
    write_markdown: bool,
    markdown_out: Utf8PathBuf,
) -> anyhow::Result<()> {
    let result = (|| -> anyhow::Result<i32> {
        let catalog = load_catalog_file(&cli.catalog)?;
        let directory = load_state_file(&cli.state)?;

        let output = run_decide(DecideInput {
            catalog: &catalog,
            directory: &directory,
            session_id: session,
            policy_name: policy,
            now_ms: now,
        })?;

        let json = serialize_envelope(&output.envelope)?;
        write_text(&report_out, &json).context("write decision json")?;

        let renderable = RenderableDecision::from(&output.envelope.decision);
        if write_markdown {
            write_text(&markdown_out, &render_markdown(&renderable))
                .context("write markdown")?;
        }
        print!("{}", render_decision_text(&renderable));

        Ok(decision_exit_code(output.envelope.decision.status))
    })();

    match result {
        Ok(code) => {
            if code != 0 {
                std::process::exit(code);
            }
            Ok(())
        }
        Err(err) => {
            eprintln!("stepup error: {err:#}");
            std::process::exit(1);
        }
    }
}

fn cmd_patterns(cli: &Cli, policy: &str) -> anyhow::Result<()> {
    let catalog = load_catalog_file(&cli.catalog)?;
    let patterns = stepup_app::policy_patterns(&catalog, policy)?;

    if patterns.is_empty() {
        println!("no patterns can satisfy policy {policy}");
        return Ok(());
    }
    for pattern in patterns {
        println!("{}", pattern.join(" + "));
    }
    Ok(())
}

fn cmd_show(cli: &Cli) -> anyhow::Result<()> {
    let catalog = load_catalog_file(&cli.catalog)?;
    let directory = load_state_file(&cli.state)?;

    let state = state_to_renderable(&catalog, &directory);
    print!("{}", render_state_text(&state));
    Ok(())
}

fn cmd_mutate(cli: &Cli, mutation: Mutation<'_>, now: Option<i64>) -> anyhow::Result<()> {
    let mut directory = load_state_file(&cli.state)?;
    apply_mutation(&mut directory, mutation, now)?;
    stepup_store::save_state(&cli.state, &directory)?;

    eprintln!("stepup: state written to {}", cli.state);
    Ok(())
}

fn cmd_demo(cli: &Cli, now: Option<i64>) -> anyhow::Result<()> {
    let catalog = load_catalog_file(&cli.catalog)?;
    let directory = load_state_file(&cli.state)?;

    let transcript = run_demo(&catalog, &directory, now)?;
    print!("{transcript}");
    Ok(())
}
