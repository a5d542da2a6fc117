use aws_lambda_events::apigw::ApiGatewayProxyRequest;
use clap::{Parser, Subcommand};
use lambda_runtime::{LambdaEvent, service_fn};

use timestamp_fn::core::handler::TimestampHandler;
use timestamp_fn::core::log;
use timestamp_fn::core::time::SystemClock;
use timestamp_fn::core::types::StatusPolicy;

#[derive(Parser, Debug)]
#[command(name = "timestamp-fn")]
#[command(about = "Serverless function reporting the current server time as JSON.", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

impl Cli {
    /// The parsed subcommand, `serve` when none was given.
    fn command_or_default(self) -> Commands {
        self.command.unwrap_or(Commands::Serve {
            legacy_status: false,
        })
    }
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
enum Commands {
    /// Serve invocations from the Lambda runtime API (default)
    Serve {
        /// Report status 50 instead of 200
        #[arg(long)]
        legacy_status: bool,
    },

    /// Run the handler once and print the proxy response
    Invoke {
        /// Report status 50 instead of 200
        #[arg(long)]
        legacy_status: bool,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    log::init()?;

    match cli.command_or_default() {
        Commands::Serve { legacy_status } => {
            serve(StatusPolicy::from_legacy_flag(legacy_status))
                .await
                .map_err(|e| anyhow::anyhow!(e))?;
        }
        Commands::Invoke { legacy_status } => {
            let handler =
                TimestampHandler::new(SystemClock, StatusPolicy::from_legacy_flag(legacy_status));
            let resp = handler.respond()?;
            println!("{}", serde_json::to_string_pretty(&resp)?);
        }
    }

    Ok(())
}

async fn serve(status: StatusPolicy) -> Result<(), lambda_runtime::Error> {
    let handler = TimestampHandler::new(SystemClock, status);
    tracing::info!(status = handler.status().code(), "starting timestamp function");

    lambda_runtime::run(service_fn(
        move |event: LambdaEvent<ApiGatewayProxyRequest>| async move {
            handler
                .handle(event)
                .await
                .map_err(lambda_runtime::Error::from)
        },
    ))
    .await
}
