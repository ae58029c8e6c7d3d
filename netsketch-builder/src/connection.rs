use crate::error::{BuilderError, Result};
use netsketch_core::{Direction, Edge, Graph};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

/// Arrow direction picked for a manual connection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ConnectionDirection {
    #[default]
    LeftRight,
    RightLeft,
    Bidirectional,
}

impl ConnectionDirection {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "left-right" | "->" | "-->" => Some(ConnectionDirection::LeftRight),
            "right-left" | "<-" | "<--" => Some(ConnectionDirection::RightLeft),
            "bidirectional" | "both" | "<->" | "<-->" => Some(ConnectionDirection::Bidirectional),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ConnectionDirection::LeftRight => "left-right",
            ConnectionDirection::RightLeft => "right-left",
            ConnectionDirection::Bidirectional => "bidirectional",
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            ConnectionDirection::LeftRight => "-->",
            ConnectionDirection::RightLeft => "<--",
            ConnectionDirection::Bidirectional => "<-->",
        }
    }
}

impl From<ConnectionDirection> for Direction {
    fn from(direction: ConnectionDirection) -> Self {
        match direction {
            ConnectionDirection::LeftRight => Direction::Forward,
            ConnectionDirection::RightLeft => Direction::Reverse,
            ConnectionDirection::Bidirectional => Direction::Both,
        }
    }
}

/// One hand-entered link between two devices
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Connection {
    pub device1: String,
    pub protocol: String,
    pub direction: ConnectionDirection,
    pub device2: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub port: Option<String>,
}

impl Connection {
    pub fn new(
        device1: impl Into<String>,
        protocol: impl Into<String>,
        direction: ConnectionDirection,
        device2: impl Into<String>,
    ) -> Self {
        Self {
            device1: device1.into(),
            protocol: protocol.into(),
            direction,
            device2: device2.into(),
            port: None,
        }
    }

    pub fn with_port(mut self, port: impl Into<String>) -> Self {
        let port = port.into();
        self.port = if port.trim().is_empty() {
            None
        } else {
            Some(port.trim().to_string())
        };
        self
    }

    /// Parse `DEVICE,PROTOCOL,DIRECTION,DEVICE[,PORT]`
    pub fn parse(spec: &str) -> Result<Self> {
        let fields: Vec<&str> = spec.split(',').map(str::trim).collect();
        if fields.len() != 4 && fields.len() != 5 {
            return Err(BuilderError::InvalidConnection(spec.to_string()));
        }

        let direction = ConnectionDirection::from_str(fields[2])
            .ok_or_else(|| BuilderError::UnknownDirection(fields[2].to_string()))?;

        let mut connection = Connection::new(fields[0], fields[1], direction, fields[3]);
        if let Some(port) = fields.get(4) {
            connection = connection.with_port(*port);
        }
        connection.validate()?;
        Ok(connection)
    }

    /// Both devices and the protocol must be filled in
    pub fn validate(&self) -> Result<()> {
        if self.device1.trim().is_empty() {
            return Err(BuilderError::MissingField("device1"));
        }
        if self.protocol.trim().is_empty() {
            return Err(BuilderError::MissingField("protocol"));
        }
        if self.device2.trim().is_empty() {
            return Err(BuilderError::MissingField("device2"));
        }
        Ok(())
    }

    /// Edge label: the protocol, with `:port` when a port is set
    pub fn label(&self) -> String {
        match &self.port {
            Some(port) => format!("{}:{}", self.protocol.trim(), port),
            None => self.protocol.trim().to_string(),
        }
    }

    pub fn to_edge(&self) -> Edge {
        Edge::new(self.device1.trim(), self.device2.trim())
            .with_label(self.label())
            .with_direction(self.direction.into())
    }
}

impl fmt::Display for Connection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} ({})",
            self.device1,
            self.direction.symbol(),
            self.device2,
            self.label()
        )
    }
}

/// Ordered, editable list of manual connections
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectionList {
    connections: Vec<Connection>,
}

impl ConnectionList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_connections(connections: Vec<Connection>) -> Result<Self> {
        for connection in &connections {
            connection.validate()?;
        }
        Ok(Self { connections })
    }

    /// Append a validated connection
    pub fn add(&mut self, connection: Connection) -> Result<()> {
        connection.validate()?;
        debug!("Adding connection {}", connection);
        self.connections.push(connection);
        Ok(())
    }

    /// Overwrite the connection at `index` (editing in place)
    pub fn replace(&mut self, index: usize, connection: Connection) -> Result<Connection> {
        connection.validate()?;
        let len = self.connections.len();
        let slot = self
            .connections
            .get_mut(index)
            .ok_or(BuilderError::IndexOutOfRange { index, len })?;
        Ok(std::mem::replace(slot, connection))
    }

    pub fn remove(&mut self, index: usize) -> Result<Connection> {
        if index >= self.connections.len() {
            return Err(BuilderError::IndexOutOfRange {
                index,
                len: self.connections.len(),
            });
        }
        Ok(self.connections.remove(index))
    }

    pub fn clear(&mut self) {
        self.connections.clear();
    }

    pub fn get(&self, index: usize) -> Option<&Connection> {
        self.connections.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Connection> {
        self.connections.iter()
    }

    pub fn len(&self) -> usize {
        self.connections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.connections.is_empty()
    }

    /// Convert into a graph: one labeled edge per connection, devices in
    /// first-seen order
    pub fn to_graph(&self) -> Graph {
        let mut graph = Graph::new();
        for connection in &self.connections {
            graph.add_edge(connection.to_edge());
        }
        graph
    }
}
