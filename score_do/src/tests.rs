use crate::board::{stored_or_missing, Environment, ScoreBoard, Subscriber, MISSING_VALUE};
use proto::{ScoreRecord, C2S, S2C};
use std::cell::RefCell;
use std::rc::Rc;
use worker::*;

struct MockSubscriber {
    pub sent_messages: RefCell<Vec<Vec<u8>>>,
    pub fail: bool,
}

impl MockSubscriber {
    fn new() -> Self {
        Self {
            sent_messages: RefCell::new(Vec::new()),
            fail: false,
        }
    }

    fn broken() -> Self {
        Self {
            sent_messages: RefCell::new(Vec::new()),
            fail: true,
        }
    }

    fn last_message(&self) -> Option<S2C> {
        self.sent_messages
            .borrow()
            .last()
            .map(|bytes| S2C::from_bytes(bytes).unwrap())
    }

    fn count(&self) -> usize {
        self.sent_messages.borrow().len()
    }
}

impl Subscriber for MockSubscriber {
    fn send_bytes(&self, bytes: &[u8]) -> Result<()> {
        if self.fail {
            return Err(Error::RustError("socket closed".to_string()));
        }
        self.sent_messages.borrow_mut().push(bytes.to_vec());
        Ok(())
    }
}

struct MockEnv {
    lines: Rc<RefCell<Vec<String>>>,
}

impl Environment for MockEnv {
    fn log(&self, msg: String) {
        self.lines.borrow_mut().push(msg);
    }
}

fn board() -> ScoreBoard {
    ScoreBoard::new(Box::new(MockEnv {
        lines: Rc::new(RefCell::new(Vec::new())),
    }))
}

#[test]
fn test_board_starts_unloaded_and_empty() {
    let board = board();
    assert!(!board.loaded);
    assert_eq!(board.current, None);
    assert_eq!(board.state_message(), S2C::Scores(None));
}

#[test]
fn test_hydrate_from_storage() {
    let lines = Rc::new(RefCell::new(Vec::new()));
    let mut board = ScoreBoard::new(Box::new(MockEnv {
        lines: lines.clone(),
    }));

    board.hydrate(Some(ScoreRecord::new(2, 1)));

    assert!(board.loaded);
    assert_eq!(board.current, Some(ScoreRecord::new(2, 1)));
    assert_eq!(lines.borrow().len(), 1);
}

#[test]
fn test_hydrate_empty_storage_still_marks_loaded() {
    let mut board = board();
    board.hydrate(None);
    assert!(board.loaded);
    assert_eq!(board.current, None);
}

#[test]
fn test_first_load_from_empty_storage() {
    let mut board = board();

    board
        .load(Err(Error::JsError(MISSING_VALUE.to_string())))
        .unwrap();

    assert!(board.loaded);
    assert_eq!(board.current, None);
    assert_eq!(board.state_message(), S2C::Scores(None));
}

#[test]
fn test_load_stored_record() {
    let mut board = board();
    board.load(Ok(ScoreRecord::new(3, 2))).unwrap();
    assert!(board.loaded);
    assert_eq!(board.current, Some(ScoreRecord::new(3, 2)));
}

#[test]
fn test_load_passes_other_storage_errors_on() {
    let mut board = board();

    let result = board.load(Err(Error::JsError("storage offline".to_string())));

    assert!(result.is_err());
    assert!(!board.loaded, "Next request retries the read");
    assert!(stored_or_missing(Err(Error::RustError(MISSING_VALUE.to_string()))).is_err());
}

#[test]
fn test_greet_sends_current_value() {
    let mut board = board();
    let sub = MockSubscriber::new();

    board.greet(&sub).unwrap();
    assert_eq!(sub.last_message(), Some(S2C::Scores(None)));

    board.set(ScoreRecord::new(1, 0));
    board.greet(&sub).unwrap();
    assert_eq!(
        sub.last_message(),
        Some(S2C::Scores(Some(ScoreRecord::new(1, 0))))
    );
}

#[test]
fn test_parse_set_scores() {
    let board = board();
    let bytes = C2S::SetScores(ScoreRecord::new(3, 1)).to_bytes().unwrap();
    assert_eq!(board.parse_message(&bytes).unwrap(), ScoreRecord::new(3, 1));
}

#[test]
fn test_parse_rejects_garbage() {
    let board = board();
    assert!(board.parse_message(&[0xff, 0xff, 0xff]).is_err());
    assert!(board.parse_message(&[]).is_err());
}

#[test]
fn test_last_writer_wins() {
    let mut board = board();
    board.set(ScoreRecord::new(1, 0));
    board.set(ScoreRecord::new(0, 2));
    assert_eq!(board.current, Some(ScoreRecord::new(0, 2)));
    assert_eq!(board.writes, 2);
}

#[test]
fn test_broadcast_reaches_every_subscriber() {
    let mut board = board();
    board.set(ScoreRecord::new(2, 2));
    let subs = vec![MockSubscriber::new(), MockSubscriber::new()];

    let delivered = board.broadcast(&subs);

    assert_eq!(delivered, 2);
    for sub in &subs {
        assert_eq!(sub.count(), 1);
        assert_eq!(
            sub.last_message(),
            Some(S2C::Scores(Some(ScoreRecord::new(2, 2))))
        );
    }
}

#[test]
fn test_broadcast_skips_broken_subscriber() {
    let mut board = board();
    board.set(ScoreRecord::new(1, 1));
    let subs = vec![
        MockSubscriber::new(),
        MockSubscriber::broken(),
        MockSubscriber::new(),
    ];

    assert_eq!(board.broadcast(&subs), 2);
    assert_eq!(subs[1].count(), 0);
    assert_eq!(subs[2].count(), 1);
}

#[test]
fn test_broadcast_with_no_subscribers() {
    let board = board();
    let subs: Vec<MockSubscriber> = Vec::new();
    assert_eq!(board.broadcast(&subs), 0);
}
