use vidwall_common::types::LayoutMode;

/// Input the wall reacts to without touching the item list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WallCommand {
    CycleMode,
    SetMode(LayoutMode),
    CarouselNext,
    CarouselPrev,
    CarouselSelect(usize),
}
