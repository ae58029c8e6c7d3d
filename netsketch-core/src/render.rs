//! Diagram text rendering
//!
//! Renderers turn a [`Graph`] into graph-description text. They never touch
//! the graph itself. Turning that text into an image is the job of an external
//! [`DiagramRenderer`].

use crate::error::RenderError;
use crate::model::{Direction, Edge, Graph};
use std::collections::{HashMap, HashSet};

/// Serializes a graph into a diagram notation
pub trait GraphRenderer {
    fn render(&self, graph: &Graph) -> String;
}

/// External service that turns diagram text into image bytes
pub trait DiagramRenderer {
    fn render(&self, text: &str) -> Result<Vec<u8>, RenderError>;
}

/// Diagram notations the renderers produce
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagramFormat {
    Mermaid,
    PlantUml,
}

impl DiagramFormat {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "mermaid" | "mmd" => Some(DiagramFormat::Mermaid),
            "plantuml" | "puml" => Some(DiagramFormat::PlantUml),
            _ => None,
        }
    }
}

/// Assigns each node a unique, notation-safe identifier
struct IdTable {
    ids: HashMap<String, String>,
}

impl IdTable {
    fn build(graph: &Graph, sanitize: fn(&str) -> String) -> Self {
        let mut ids = HashMap::new();
        let mut taken = HashSet::new();

        for label in graph.nodes() {
            let base = sanitize(label);
            let base = if base.is_empty() { "node".to_string() } else { base };
            let mut id = base.clone();
            let mut suffix = 2;
            while !taken.insert(id.clone()) {
                id = format!("{}_{}", base, suffix);
                suffix += 1;
            }
            ids.insert(label.to_string(), id);
        }

        Self { ids }
    }

    fn get<'a>(&'a self, label: &'a str) -> &'a str {
        self.ids.get(label).map(String::as_str).unwrap_or(label)
    }
}

fn mermaid_id(label: &str) -> String {
    let mut id = String::with_capacity(label.len());
    let mut last_was_sep = false;
    for c in label.chars() {
        if c.is_ascii_alphanumeric() {
            id.push(c);
            last_was_sep = false;
        } else if !last_was_sep {
            id.push('_');
            last_was_sep = true;
        }
    }
    id.trim_matches('_').to_string()
}

fn plantuml_id(label: &str) -> String {
    label
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("_")
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '_')
        .collect()
}

/// Edge text for Mermaid. Text that could end the statement or read as an
/// arrow (`;`, `-->`, brackets) is quoted.
fn edge_text(text: &str) -> String {
    let plain = !text.contains("--")
        && text
            .chars()
            .all(|c| c.is_alphanumeric() || matches!(c, ' ' | ':' | '/' | '.' | '_' | '+' | '-'));

    if plain {
        text.to_string()
    } else {
        format!("\"{}\"", text.replace('"', "#quot;"))
    }
}

/// Mermaid flowchart output: `graph TD;` followed by `;`-terminated node
/// declarations and then edges.
#[derive(Debug, Clone)]
pub struct MermaidRenderer {
    orientation: String,
}

impl Default for MermaidRenderer {
    fn default() -> Self {
        Self {
            orientation: "TD".to_string(),
        }
    }
}

impl MermaidRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the flow direction (TD, LR, BT, RL)
    pub fn with_orientation(mut self, orientation: impl Into<String>) -> Self {
        self.orientation = orientation.into();
        self
    }

    fn edge_line(&self, edge: &Edge, ids: &IdTable) -> String {
        let from = ids.get(&edge.from);
        let to = ids.get(&edge.to);

        if edge.is_self_loop() {
            let text = match &edge.label {
                Some(label) => edge_text(&format!("loop {}", label)),
                None => "loop".to_string(),
            };
            return format!("{} -- {} --> {}", from, text, to);
        }

        // Mermaid has no left-pointing arrow, so reverse edges are flipped
        let (from, to) = match edge.direction {
            Direction::Reverse => (to, from),
            _ => (from, to),
        };

        match (edge.direction, edge.label.as_deref().map(edge_text)) {
            (Direction::Both, Some(label)) => format!("{} <-- {} --> {}", from, label, to),
            (Direction::Both, None) => format!("{} <--> {}", from, to),
            (_, Some(label)) => format!("{} -- {} --> {}", from, label, to),
            (_, None) => format!("{} --> {}", from, to),
        }
    }
}

impl GraphRenderer for MermaidRenderer {
    fn render(&self, graph: &Graph) -> String {
        let ids = IdTable::build(graph, mermaid_id);
        let mut lines: Vec<String> = Vec::new();

        for label in graph.nodes() {
            let id = ids.get(label);
            if id == label {
                lines.push(id.to_string());
            } else {
                lines.push(format!("{}[\"{}\"]", id, label.replace('"', "#quot;")));
            }
        }

        for edge in graph.edges() {
            lines.push(self.edge_line(&edge, &ids));
        }

        let mut out = format!("graph {};", self.orientation);
        for line in lines {
            out.push('\n');
            out.push_str(&line);
            out.push(';');
        }
        out
    }
}

pub const DEFAULT_PLANTUML_TITLE: &str = "Network Architecture Diagram";

/// PlantUML component diagram output, framed by `@startuml` / `@enduml`
#[derive(Debug, Clone)]
pub struct PlantUmlRenderer {
    title: String,
    note: Option<String>,
}

impl Default for PlantUmlRenderer {
    fn default() -> Self {
        Self {
            title: DEFAULT_PLANTUML_TITLE.to_string(),
            note: None,
        }
    }
}

impl PlantUmlRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Attach a floating note, e.g. the prompt the diagram came from
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        let note = note.into();
        self.note = if note.trim().is_empty() {
            None
        } else {
            Some(note.trim().to_string())
        };
        self
    }
}

impl GraphRenderer for PlantUmlRenderer {
    fn render(&self, graph: &Graph) -> String {
        let ids = IdTable::build(graph, plantuml_id);
        let mut out = String::from("@startuml\n!theme plain\n");
        out.push_str(&format!("title {}\n\n", self.title.replace('\n', " ")));

        for label in graph.nodes() {
            let shown: String = label.chars().filter(|c| *c != '[' && *c != ']').collect();
            out.push_str(&format!("[{}] as {}\n", shown, ids.get(label)));
        }
        if graph.node_count() > 0 {
            out.push('\n');
        }

        for edge in graph.edges() {
            let arrow = match edge.direction {
                Direction::Forward => "-->",
                Direction::Reverse => "<--",
                Direction::Both => "<-->",
            };
            let label = match (&edge.label, edge.is_self_loop()) {
                (Some(label), _) => format!(" : {}", label),
                (None, true) => " : loop".to_string(),
                (None, false) => String::new(),
            };
            out.push_str(&format!(
                "{} {} {}{}\n",
                ids.get(&edge.from),
                arrow,
                ids.get(&edge.to),
                label
            ));
        }
        if graph.edge_count() > 0 {
            out.push('\n');
        }

        if let Some(note) = &self.note {
            let flat = note.split_whitespace().collect::<Vec<_>>().join(" ");
            out.push_str(&format!("note top : {}\n\n", flat));
        }

        out.push_str("@enduml");
        out
    }
}
