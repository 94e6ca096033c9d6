//! Behavior tree nodes for the AI turn.
//!
//! Every tick completes immediately and returns [`Status::Success`] or
//! [`Status::Failure`]; there is no running state in a turn-based duel.

use super::AiTurn;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Status {
    Success,
    Failure,
}

impl Status {
    pub const fn from_bool(value: bool) -> Self {
        if value { Self::Success } else { Self::Failure }
    }
}

pub trait AiNode: Send + Sync {
    fn tick(&self, turn: &mut AiTurn<'_>) -> Status;
}

/// Runs children left to right until one fails (short-circuit AND).
pub struct Sequence {
    children: Vec<Box<dyn AiNode>>,
}

impl Sequence {
    pub fn new(children: Vec<Box<dyn AiNode>>) -> Self {
        Self { children }
    }
}

impl AiNode for Sequence {
    fn tick(&self, turn: &mut AiTurn<'_>) -> Status {
        for child in &self.children {
            if child.tick(turn) == Status::Failure {
                return Status::Failure;
            }
        }
        Status::Success
    }
}

/// Runs children left to right until one succeeds (short-circuit OR).
pub struct Selector {
    children: Vec<Box<dyn AiNode>>,
}

impl Selector {
    pub fn new(children: Vec<Box<dyn AiNode>>) -> Self {
        Self { children }
    }
}

impl AiNode for Selector {
    fn tick(&self, turn: &mut AiTurn<'_>) -> Status {
        for child in &self.children {
            if child.tick(turn) == Status::Success {
                return Status::Success;
            }
        }
        Status::Failure
    }
}

pub struct Inverter {
    child: Box<dyn AiNode>,
}

impl Inverter {
    pub fn new(child: Box<dyn AiNode>) -> Self {
        Self { child }
    }
}

impl AiNode for Inverter {
    fn tick(&self, turn: &mut AiTurn<'_>) -> Status {
        match self.child.tick(turn) {
            Status::Success => Status::Failure,
            Status::Failure => Status::Success,
        }
    }
}

/// Leaf that inspects the turn without acting.
pub struct Condition<F> {
    label: &'static str,
    check: F,
}

impl<F> Condition<F>
where
    F: Fn(&AiTurn<'_>) -> bool + Send + Sync,
{
    pub fn new(label: &'static str, check: F) -> Self {
        Self { label, check }
    }
}

impl<F> AiNode for Condition<F>
where
    F: Fn(&AiTurn<'_>) -> bool + Send + Sync,
{
    fn tick(&self, turn: &mut AiTurn<'_>) -> Status {
        let passed = (self.check)(turn);
        tracing::debug!("  condition {}: {}", self.label, passed);
        Status::from_bool(passed)
    }
}

/// Leaf that acts on the arena.
pub struct Action<F> {
    run: F,
}

impl<F> Action<F>
where
    F: Fn(&mut AiTurn<'_>) -> Status + Send + Sync,
{
    pub fn new(run: F) -> Self {
        Self { run }
    }
}

impl<F> AiNode for Action<F>
where
    F: Fn(&mut AiTurn<'_>) -> Status + Send + Sync,
{
    fn tick(&self, turn: &mut AiTurn<'_>) -> Status {
        (self.run)(turn)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Fixed(Status);

    impl AiNode for Fixed {
        fn tick(&self, _turn: &mut AiTurn<'_>) -> Status {
            self.0
        }
    }

    fn fixed(status: Status) -> Box<dyn AiNode> {
        Box::new(Fixed(status))
    }

    #[test]
    fn composites_short_circuit() {
        let mut arena = crate::arena::Arena::new(crate::config::ArenaConfig::default());
        let mut turn = AiTurn::new(&mut arena);

        let seq = Sequence::new(vec![fixed(Status::Success), fixed(Status::Failure)]);
        assert_eq!(seq.tick(&mut turn), Status::Failure);

        let sel = Selector::new(vec![fixed(Status::Failure), fixed(Status::Success)]);
        assert_eq!(sel.tick(&mut turn), Status::Success);

        let inv = Inverter::new(fixed(Status::Failure));
        assert_eq!(inv.tick(&mut turn), Status::Success);

        assert_eq!(Selector::new(vec![]).tick(&mut turn), Status::Failure);
        assert_eq!(Sequence::new(vec![]).tick(&mut turn), Status::Success);
    }
}
