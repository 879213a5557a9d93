use clap::Subcommand;

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Upload a document and print its server-assigned id
    Upload {
        file: String,
    },

    /// Ask a natural-language question about an uploaded document
    Query {
        text: String,

        /// Scope the question to a specific document; omit to let the server decide
        #[arg(short, long)]
        document_id: Option<String>,
    },

    /// Run a natural-language query translated server-side to SQL
    Sql {
        query: String,

        #[arg(short, long)]
        document_id: Option<String>,
    },

    /// Render a chart from document columns
    Visualize {
        document_id: String,

        /// bar, line, or pie
        #[arg(short = 't', long = "type", default_value = "bar")]
        chart_type: String,

        /// Column name; repeat to add series (order maps to axes)
        #[arg(short, long = "column", required = true)]
        column: Vec<String>,
    },

    /// Generate images from a text prompt
    Imagine {
        prompt: String,

        /// Number of images to generate
        #[arg(short, long)]
        num: Option<u32>,

        /// Resolution, e.g. 1024x1024
        #[arg(short, long)]
        size: Option<String>,
    },
}
