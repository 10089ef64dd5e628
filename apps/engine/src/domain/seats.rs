//! Seat / turn math helpers (4 fixed seats: 0..=3).
//!
//! Every layer shares these for rotation and "who acts next". Clockwise is
//! positive; the modulo is always applied to the full sum.

use super::rules::PLAYERS;

pub type Seat = u8; // 0..=3

#[inline]
pub fn seat_offset(seat: Seat, delta: i8) -> Seat {
    let seat_i = seat as i16;
    let delta_i = delta as i16;
    ((seat_i + delta_i).rem_euclid(PLAYERS as i16)) as Seat
}

/// Returns the next seat clockwise (0 → 1 → 2 → 3 → 0).
#[inline]
pub fn next_seat(seat: Seat) -> Seat {
    seat_offset(seat, 1)
}

/// Returns the seat `n` steps clockwise from `start`.
#[inline]
pub fn nth_from(start: Seat, n: u8) -> Seat {
    ((start as usize + n as usize) % PLAYERS) as Seat
}

/// Partner sits across the table.
#[inline]
pub fn teammate_seat(seat: Seat) -> Seat {
    seat_offset(seat, 2)
}

#[inline]
pub fn is_valid_seat(seat: Seat) -> bool {
    (seat as usize) < PLAYERS
}
