pub mod array_list;
pub mod heap;
pub mod linked_list;
pub mod queue;
pub mod stack;

pub use array_list::ArrayList;
pub use heap::{BinaryHeap, HeapOrder, Max, MaxHeap, Min, MinHeap};
pub use linked_list::LinkedList;
pub use queue::Queue;
pub use stack::Stack;
