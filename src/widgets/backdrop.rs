//! Animated ocean backdrop behind the form cards.
//!
//! A [`Backdrop`] expands a seed into a fixed set of particle tracks once,
//! at construction. Rendering a frame is then a pure function of those
//! tracks, the tick counter and the area, so any (seed, tick, area) triple
//! always produces the same buffer. Nothing here reads a clock or an
//! ambient RNG.

use crate::styles::theme;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use ratatui::prelude::*;
use ratatui::widgets::Widget;

/// Which shapes drift across the screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackdropVariant {
    /// Bubbles rising from the bottom edge (sign-in)
    Bubbles,
    /// Fish swimming left to right (sign-up)
    Fish,
}

/// Number of particle tracks per backdrop.
const BUBBLE_COUNT: usize = 18;
const FISH_COUNT: usize = 6;

/// The fish glyph, drawn head first.
const FISH_GLYPH: &str = "><>";

/// Bubble glyphs by size, smallest first.
const BUBBLE_GLYPHS: [char; 4] = ['.', 'o', 'O', '°'];

/// One particle track. Positions are stored as fractions (permille) of the
/// render area so the same track scales to any terminal size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Particle {
    /// Horizontal anchor for bubbles, vertical lane for fish
    anchor_permille: u16,
    /// Offset into the movement cycle, desynchronizes the tracks
    phase: u16,
    /// Cells moved per speed step (1..=3)
    speed: u16,
    /// Size class, indexes into the glyph table
    size: u8,
}

/// Seeded particle field for one screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Backdrop {
    variant: BackdropVariant,
    particles: Vec<Particle>,
}

impl Backdrop {
    /// Expand `seed` into a particle field for `variant`.
    ///
    /// Equal seeds give equal fields, so a screen that rebuilds its
    /// backdrop on re-entry shows the same arrangement every time.
    pub fn new(variant: BackdropVariant, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let count = match variant {
            BackdropVariant::Bubbles => BUBBLE_COUNT,
            BackdropVariant::Fish => FISH_COUNT,
        };
        let particles = (0..count)
            .map(|_| Particle {
                anchor_permille: rng.random_range(0..1000),
                phase: rng.random_range(0..1000),
                speed: rng.random_range(1..=3),
                size: rng.random_range(0..BUBBLE_GLYPHS.len() as u8),
            })
            .collect();
        Self { variant, particles }
    }

    /// Which shapes this backdrop draws.
    pub fn variant(&self) -> BackdropVariant {
        self.variant
    }

    /// Widget for one animation frame.
    pub fn widget(&self, tick: u64) -> BackdropWidget<'_> {
        BackdropWidget {
            backdrop: self,
            tick,
        }
    }
}

/// One frame of the backdrop at a given tick.
pub struct BackdropWidget<'a> {
    backdrop: &'a Backdrop,
    tick: u64,
}

impl Widget for BackdropWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        match self.backdrop.variant {
            BackdropVariant::Bubbles => render_bubbles(&self.backdrop.particles, self.tick, area, buf),
            BackdropVariant::Fish => render_fish(&self.backdrop.particles, self.tick, area, buf),
        }
    }
}

/// Scale a permille fraction onto `0..len`.
fn permille_to_offset(permille: u16, len: u16) -> u16 {
    if len == 0 {
        return 0;
    }
    (u32::from(permille) * u32::from(len - 1) / 1000) as u16
}

fn render_bubbles(particles: &[Particle], tick: u64, area: Rect, buf: &mut Buffer) {
    let t = theme();
    for p in particles {
        // Rise from the bottom edge, wrapping back around at the top
        let travel = (tick * u64::from(p.speed)) / 4 + u64::from(p.phase);
        let y_offset = (travel % u64::from(area.height)) as u16;
        let y = area.y + area.height - 1 - y_offset;

        // A small sideways wobble as the bubble rises
        let wobble = ((travel / 3) % 2) as u16;
        let x = area.x + (permille_to_offset(p.anchor_permille, area.width) + wobble)
            .min(area.width.saturating_sub(1));

        let style = if p.size <= 1 {
            t.water_deep_style()
        } else {
            t.water_style()
        };
        let glyph = BUBBLE_GLYPHS[usize::from(p.size) % BUBBLE_GLYPHS.len()];
        if let Some(cell) = buf.cell_mut((x, y)) {
            cell.set_char(glyph);
            cell.set_style(style);
        }
    }
}

fn render_fish(particles: &[Particle], tick: u64, area: Rect, buf: &mut Buffer) {
    let t = theme();
    let glyph_len = FISH_GLYPH.chars().count() as u16;
    // The cycle is wider than the area so fish leave before re-entering
    let cycle = u64::from(area.width) + u64::from(glyph_len);

    for p in particles {
        let travel = (tick * u64::from(p.speed)) / 6 + u64::from(p.phase);
        // Head position within the cycle; the body trails to the left
        let head = (travel % cycle) as u16;

        let lane = area.y + permille_to_offset(p.anchor_permille, area.height);
        let bob = ((travel / 5) % 2) as u16;
        let y = (lane + bob).min(area.y + area.height - 1);

        let style = if p.speed == 1 {
            t.water_deep_style()
        } else {
            t.water_style()
        };

        for (i, c) in FISH_GLYPH.chars().rev().enumerate() {
            // rev() puts the tail furthest behind the head
            let offset = head as i32 - i as i32;
            if offset < 0 || offset >= i32::from(area.width) {
                continue;
            }
            let x = area.x + offset as u16;
            if let Some(cell) = buf.cell_mut((x, y)) {
                cell.set_char(c);
                cell.set_style(style);
            }
        }
    }
}
