use crate::list::NodeId;

/// Why a checked list operation left the list untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The handle was removed, or it belongs to a different list.
    #[error("node {0:?} is not in this list")]
    NodeNotFound(NodeId),
    /// No node holds a value equal to the target.
    #[error("no node holds the target value")]
    ValueNotFound,
}
