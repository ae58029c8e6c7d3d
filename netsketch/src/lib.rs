pub mod handlers;

// Re-export commonly used handler functions for convenience
pub use handlers::{
    OutputFormat, RenderOptions, collect_connections, describe_diagnostics, load_extractor,
    read_prompt, render_extraction, render_graph, write_default_tables,
};
