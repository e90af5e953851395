use clap::Subcommand;

use chatty::connector::DEFAULT_SERVER_URL;

#[derive(Subcommand)]
pub enum Commands {
    /// Run the chat relay: POST /api/chat forwards prompts to the completion service
    Serve {
        #[arg(long, default_value = "127.0.0.1")]
        host: String,

        #[arg(short, long, default_value = "3000")]
        port: u16,

        /// Bind to 0.0.0.0 instead of --host, exposing the server on all network interfaces
        #[arg(long)]
        public: bool,

        /// Answer with an offline echo service instead of calling OpenAI
        #[arg(long)]
        mock_completions: bool,
    },

    /// Open the terminal chat surface against a running server
    Chat {
        #[arg(short, long, default_value = DEFAULT_SERVER_URL)]
        server: String,
    },

    /// Send a single prompt and print the response
    Ask {
        prompt: String,

        #[arg(short, long, default_value = DEFAULT_SERVER_URL)]
        server: String,
    },
}
