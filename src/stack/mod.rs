pub use self::stack::Stack;
mod stack;
