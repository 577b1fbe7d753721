//! Tests for the bounded pop history

#[cfg(test)]
mod tests {
    use crate::queue::api::{MessageQueue, MessageSpec};

    #[test]
    fn test_history_bounded_to_last_pops() {
        let mut queue = MessageQueue::new(4);
        for n in 0..10u32 {
            queue.insert(MessageSpec::new(1, 1), n).unwrap();
        }

        let popped: Vec<u32> = std::iter::from_fn(|| queue.pop().map(|m| m.payload)).collect();
        assert_eq!(popped.len(), 10);

        let history: Vec<u32> = queue.history().iter().map(|m| m.payload).collect();
        assert_eq!(history.len(), 4);
        assert_eq!(history, popped[6..].to_vec());
    }

    #[test]
    fn test_history_records_each_play() {
        let mut queue = MessageQueue::new(5);
        queue
            .insert(MessageSpec::new(2, 2).with_play_count(3), "loop")
            .unwrap();
        while queue.pop().is_some() {}

        let plays: Vec<u32> = queue.history().iter().map(|m| m.remaining_plays).collect();
        assert_eq!(plays, vec![2, 1, 0]);
    }

    #[test]
    fn test_history_not_touched_by_empty_pop() {
        let mut queue = MessageQueue::new(2);
        queue.insert(MessageSpec::new(1, 1), 'a').unwrap();
        queue.pop();
        assert!(queue.pop().is_none());

        assert_eq!(queue.history().len(), 1);
        assert_eq!(queue.history().latest().map(|m| m.payload), Some('a'));
    }

    #[test]
    fn test_history_size_zero_keeps_nothing() {
        let mut queue = MessageQueue::new(0);
        queue.insert(MessageSpec::new(1, 1), 'a').unwrap();
        assert!(queue.pop().is_some());
        assert!(queue.history().is_empty());
    }

    #[test]
    fn test_history_entries_keep_metadata() {
        let mut queue = MessageQueue::new(3);
        queue.insert(MessageSpec::new(8, 6), "meta").unwrap();
        queue.pop();

        let entry = queue.history().latest().unwrap();
        assert_eq!(entry.priority, 8);
        assert_eq!(entry.message_type, 6);
        assert_eq!(entry.remaining_plays, 0);
        assert_eq!(entry.payload, "meta");
    }
}
