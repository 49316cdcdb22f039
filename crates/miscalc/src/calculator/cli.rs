#[derive(Debug, clap::Parser)]
#[command(name = "calculator")]
#[command(about = "Calculator evaluation service")]
pub struct App {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, clap::Subcommand)]
pub enum Commands {
    /// Start the calculator HTTP service
    #[clap(name = "serve")]
    Serve(ServeOptions),

    /// Evaluate a single operation and print the response envelope
    #[clap(name = "eval")]
    Eval(EvalOptions),
}

#[derive(Debug, clap::Args)]
pub struct ServeOptions {
    /// Port to listen on
    #[arg(short, long, default_value = "3000")]
    pub port: u16,

    /// Host to bind to
    #[arg(long, default_value = "127.0.0.1")]
    pub host: String,
}

#[derive(Debug, clap::Args)]
pub struct EvalOptions {
    /// Operator name (ADD, SUBTRACT, MULTIPLY, DIVIDE, POWER, SQUARE, SQUARE_ROOT)
    pub operator: String,

    /// Raw operand strings, in order
    #[arg(allow_negative_numbers = true)]
    pub operands: Vec<String>,
}
