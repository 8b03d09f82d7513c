//! Card types and deck constants.

use core::fmt;

/// Card suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suit {
    /// Hearts.
    Hearts,
    /// Diamonds.
    Diamonds,
    /// Clubs.
    Clubs,
    /// Spades.
    Spades,
}

impl Suit {
    /// All four suits in canonical deck order.
    pub const ALL: [Self; 4] = [Self::Hearts, Self::Diamonds, Self::Clubs, Self::Spades];

    /// Returns the suit symbol (`♥`, `♦`, `♣`, `♠`).
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Hearts => "♥",
            Self::Diamonds => "♦",
            Self::Clubs => "♣",
            Self::Spades => "♠",
        }
    }

    /// Returns whether the suit is printed in red.
    #[must_use]
    pub const fn is_red(self) -> bool {
        matches!(self, Self::Hearts | Self::Diamonds)
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// A playing card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    /// The suit of the card.
    pub suit: Suit,
    /// The rank of the card (1 = Ace, 11 = Jack, 12 = Queen, 13 = King).
    pub rank: u8,
}

impl Card {
    /// Lowest valid rank (Ace).
    pub const ACE: u8 = 1;
    /// Highest valid rank (King).
    pub const KING: u8 = 13;

    /// Creates a new card.
    ///
    /// Note: This function does not validate the rank. A card whose rank is
    /// outside `1..=13` is not a playing card and scores zero points.
    #[must_use]
    pub const fn new(suit: Suit, rank: u8) -> Self {
        Self { suit, rank }
    }

    /// Creates a card, returning `None` if the rank is outside `1..=13`.
    #[must_use]
    pub const fn try_new(suit: Suit, rank: u8) -> Option<Self> {
        if rank >= Self::ACE && rank <= Self::KING {
            Some(Self { suit, rank })
        } else {
            None
        }
    }

    /// Returns whether the rank denotes a real playing card.
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        self.rank >= Self::ACE && self.rank <= Self::KING
    }

    /// Returns whether the card is an Ace.
    #[must_use]
    pub const fn is_ace(&self) -> bool {
        self.rank == Self::ACE
    }

    /// Returns the rank label (`A`, `2`..`10`, `J`, `Q`, `K`), or `?` for a
    /// non-card.
    #[must_use]
    pub const fn rank_label(&self) -> &'static str {
        match self.rank {
            1 => "A",
            2 => "2",
            3 => "3",
            4 => "4",
            5 => "5",
            6 => "6",
            7 => "7",
            8 => "8",
            9 => "9",
            10 => "10",
            11 => "J",
            12 => "Q",
            13 => "K",
            _ => "?",
        }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank_label(), self.suit)
    }
}

/// Number of cards per deck.
pub const DECK_SIZE: usize = 52;
