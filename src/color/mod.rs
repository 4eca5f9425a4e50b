//! DSATUR coloring of a [`ConflictGraph`](crate::ConflictGraph) and extraction of the
//! resulting color groups. Both are implemented as inherent methods on the graph.
mod dsatur;
mod sets;
