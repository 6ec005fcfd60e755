pub use self::queue::Queue;
mod queue;

pub use self::iter::Iter;
mod iter;

use self::node::Node;
mod node;
