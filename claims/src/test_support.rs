//! Fixtures and deterministic time for unit tests.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::address::Address;
use crate::campaign::{Campaign, Phase};
use crate::clock::Clock;
use crate::draft::CampaignDraft;
use crate::hold::Scheduler;
use crate::image::ImageData;

// =============================================================================
// FIXTURES
// =============================================================================

pub fn address(n: u8) -> Address {
    Address::parse(&format!("0x{}", hex::encode([n; 20]))).unwrap()
}

pub fn sample_image() -> ImageData {
    ImageData::from_upload("image/png", b"png").unwrap()
}

pub fn sample_phase(price: f64, max_participants: u32) -> Phase {
    Phase {
        id: "p0".to_owned(),
        price_per_claim: price,
        max_participants,
        tokens_allocated: 10_000,
    }
}

pub fn sample_campaign(id: &str, price: f64, max_participants: u32) -> Campaign {
    Campaign {
        id: id.to_owned(),
        project_name: "Project".to_owned(),
        token_name: "Token".to_owned(),
        token_symbol: "TKN".to_owned(),
        description: "A campaign".to_owned(),
        image: sample_image(),
        phases: vec![sample_phase(price, max_participants)],
        created_at: 0,
        creator_address: None,
        total_claimed: 0,
    }
}

pub fn valid_draft() -> CampaignDraft {
    CampaignDraft {
        project_name: "Project".to_owned(),
        token_name: "Token".to_owned(),
        token_symbol: "TKN".to_owned(),
        description: "A campaign".to_owned(),
        image: Some(sample_image()),
        phases: vec![sample_phase(2.0, 100)],
        ..CampaignDraft::default()
    }
}

// =============================================================================
// MANUAL TIME
// =============================================================================

#[derive(Debug, Default)]
pub struct ManualClock {
    now: Cell<u64>,
}

impl ManualClock {
    pub fn at(now_ms: u64) -> Rc<Self> {
        Rc::new(Self { now: Cell::new(now_ms) })
    }

    pub fn set(&self, now_ms: u64) {
        self.now.set(now_ms);
    }
}

impl Clock for ManualClock {
    fn now_ms(&self) -> u64 {
        self.now.get()
    }
}

struct Task {
    id: u64,
    period_ms: u64,
    next_due_ms: u64,
    tick: Rc<RefCell<Box<dyn FnMut()>>>,
}

/// Scheduler whose callbacks fire only when the test advances time.
#[derive(Clone)]
pub struct ManualScheduler {
    clock: Rc<ManualClock>,
    tasks: Rc<RefCell<Vec<Task>>>,
    next_id: Rc<Cell<u64>>,
}

impl ManualScheduler {
    pub fn new(clock: Rc<ManualClock>) -> Self {
        Self { clock, tasks: Rc::default(), next_id: Rc::default() }
    }

    pub fn active_tasks(&self) -> usize {
        self.tasks.borrow().len()
    }

    /// Move time forward, firing every callback that comes due on the way.
    pub fn advance(&self, ms: u64) {
        let target = self.clock.now_ms() + ms;
        loop {
            let due = self
                .tasks
                .borrow()
                .iter()
                .filter(|t| t.next_due_ms <= target)
                .min_by_key(|t| (t.next_due_ms, t.id))
                .map(|t| (t.id, t.next_due_ms, Rc::clone(&t.tick)));
            let Some((id, due_ms, tick)) = due else {
                break;
            };
            self.clock.set(due_ms);
            if let Some(task) = self.tasks.borrow_mut().iter_mut().find(|t| t.id == id) {
                task.next_due_ms += task.period_ms;
            }
            (tick.borrow_mut())();
        }
        self.clock.set(target);
    }
}

impl Scheduler for ManualScheduler {
    type Handle = u64;

    fn schedule_repeating(&self, period_ms: u32, tick: Box<dyn FnMut()>) -> u64 {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        let period_ms = u64::from(period_ms.max(1));
        self.tasks.borrow_mut().push(Task {
            id,
            period_ms,
            next_due_ms: self.clock.now_ms() + period_ms,
            tick: Rc::new(RefCell::new(tick)),
        });
        id
    }

    fn cancel(&self, handle: u64) {
        self.tasks.borrow_mut().retain(|t| t.id != handle);
    }
}
