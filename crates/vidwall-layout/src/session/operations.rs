//! Command dispatch for WallSession.

use tracing::debug;
use vidwall_common::types::LayoutMode;

use crate::commands::WallCommand;

use super::WallSession;

impl WallSession {
    /// Execute a command against a wall showing `count` items. Returns
    /// `true` if any state changed.
    pub fn execute(&mut self, cmd: WallCommand, count: usize) -> bool {
        match cmd {
            WallCommand::CycleMode => self.set_mode(self.mode.next()),
            WallCommand::SetMode(mode) => self.set_mode(mode),
            WallCommand::CarouselNext => self.step(count, true),
            WallCommand::CarouselPrev => self.step(count, false),
            WallCommand::CarouselSelect(index) => {
                if index >= count || index == self.carousel.get() {
                    return false;
                }
                self.carousel.set(index);
                true
            }
        }
    }

    pub fn set_mode(&mut self, mode: LayoutMode) -> bool {
        if mode == self.mode {
            return false;
        }
        debug!(from = %self.mode, to = %mode, "layout mode changed");
        self.mode = mode;
        true
    }

    fn step(&mut self, count: usize, forward: bool) -> bool {
        let before = self.carousel.get();
        let after = if forward {
            self.carousel.next(count)
        } else {
            self.carousel.prev(count)
        };
        before != after
    }
}
