//! Carousel navigation: one selected index, wrapping in both directions.

mod operations;
mod types;

pub use types::*;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_state_selects_first() {
        let carousel = CarouselState::new();
        assert_eq!(carousel.get(), 0);
    }

    #[test]
    fn next_wraps() {
        let mut carousel = CarouselState::new();
        assert_eq!(carousel.next(3), 1);
        assert_eq!(carousel.next(3), 2);
        assert_eq!(carousel.next(3), 0); // wrapped
    }

    #[test]
    fn next_from_last_is_first() {
        let mut carousel = CarouselState::new();
        carousel.set(4);
        assert_eq!(carousel.next(5), 0);
    }

    #[test]
    fn prev_wraps() {
        let mut carousel = CarouselState::new();
        assert_eq!(carousel.prev(3), 2); // wrapped
        assert_eq!(carousel.prev(3), 1);
    }

    #[test]
    fn full_lap_of_prev_returns_home() {
        let mut carousel = CarouselState::new();
        for _ in 0..5 {
            carousel.prev(5);
        }
        assert_eq!(carousel.get(), 0);
    }

    #[test]
    fn next_then_prev_is_identity() {
        let mut carousel = CarouselState::new();
        carousel.set(2);
        carousel.next(4);
        carousel.prev(4);
        assert_eq!(carousel.get(), 2);
    }

    #[test]
    fn zero_count_resets_to_zero() {
        let mut carousel = CarouselState::new();
        carousel.set(3);
        assert_eq!(carousel.next(0), 0);
        carousel.set(3);
        assert_eq!(carousel.prev(0), 0);
    }

    #[test]
    fn single_item_stays_put() {
        let mut carousel = CarouselState::new();
        assert_eq!(carousel.next(1), 0);
        assert_eq!(carousel.prev(1), 0);
    }

    #[test]
    fn stale_index_wraps_into_range() {
        let mut carousel = CarouselState::new();
        carousel.set(7);
        // List shrank to 3 without a clamp: 7 % 3 = 1, so next is 2.
        assert_eq!(carousel.next(3), 2);
        carousel.set(7);
        assert_eq!(carousel.prev(3), 0);
    }

    #[test]
    fn clamp_after_list_shrinks() {
        let mut carousel = CarouselState::new();
        carousel.set(6);
        assert_eq!(carousel.clamp(4), 3);
        assert_eq!(carousel.clamp(10), 3);
        assert_eq!(carousel.clamp(0), 0);
    }

    #[test]
    fn depth_offset_takes_short_way_round() {
        let mut carousel = CarouselState::new();
        carousel.set(0);
        let offsets: Vec<isize> = (0..5).map(|i| carousel.depth_offset(i, 5)).collect();
        assert_eq!(offsets, vec![0, 1, 2, -2, -1]);

        carousel.set(3);
        let offsets: Vec<isize> = (0..6).map(|i| carousel.depth_offset(i, 6)).collect();
        assert_eq!(offsets, vec![3, -2, -1, 0, 1, 2]);
        assert_eq!(carousel.depth_offset(0, 0), 0);
    }

    #[test]
    fn depth_order_front_to_back() {
        let mut carousel = CarouselState::new();
        carousel.set(1);
        assert_eq!(carousel.depth_order(5), vec![1, 2, 0, 3, 4]);
        assert!(carousel.depth_order(0).is_empty());
    }

    #[test]
    fn serialization_roundtrip() {
        let mut carousel = CarouselState::new();
        carousel.set(2);
        let json = serde_json::to_string(&carousel).unwrap();
        let deserialized: CarouselState = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized.get(), 2);
    }
}
