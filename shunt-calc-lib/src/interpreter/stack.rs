use crate::interpreter::error::CalculationError;

/// A last-in-first-out stack that refuses to grow past a fixed capacity.
#[derive(Debug, Clone)]
pub(crate) struct BoundedStack<T> {
    elements: Vec<T>,
    capacity: usize,
}

impl<T> BoundedStack<T> {
    pub(crate) fn with_capacity(capacity: usize) -> BoundedStack<T> {
        BoundedStack {
            elements: Vec::new(),
            capacity,
        }
    }

    pub(crate) fn push(&mut self, element: T) -> Result<(), CalculationError> {
        if self.elements.len() >= self.capacity {
            return Err(CalculationError::StackOverflow {
                capacity: self.capacity,
            });
        }
        self.elements.push(element);
        Ok(())
    }

    pub(crate) fn pop(&mut self) -> Option<T> {
        self.elements.pop()
    }

    pub(crate) fn peek(&self) -> Option<&T> {
        self.elements.last()
    }

    pub(crate) fn peek_mut(&mut self) -> Option<&mut T> {
        self.elements.last_mut()
    }

    pub(crate) fn len(&self) -> usize {
        self.elements.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pop_returns_most_recently_pushed() {
        let mut stack = BoundedStack::with_capacity(3);
        stack.push(1).unwrap();
        stack.push(2).unwrap();

        assert_eq!(stack.pop(), Some(2));
        assert_eq!(stack.pop(), Some(1));
        assert_eq!(stack.pop(), None);
    }

    #[test]
    fn push_beyond_capacity_returns_err() {
        let mut stack = BoundedStack::with_capacity(2);
        stack.push('a').unwrap();
        stack.push('b').unwrap();

        let error = stack.push('c').unwrap_err();

        assert_eq!(error, CalculationError::StackOverflow { capacity: 2 });
        assert_eq!(stack.len(), 2);
    }

    #[test]
    fn peek_mut_changes_top_in_place() {
        let mut stack = BoundedStack::with_capacity(2);
        stack.push(4.0).unwrap();

        if let Some(top) = stack.peek_mut() {
            *top = -*top;
        }

        assert_eq!(stack.peek(), Some(&-4.0));
    }
}
