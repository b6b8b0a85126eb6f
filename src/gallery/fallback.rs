//! Built-in object IDs used when the live catalog listing is unreachable.
//!
//! A browse session should still show something when the listing endpoint is
//! down, so we keep a short curated list of permanent-collection works and
//! run it through the normal detail pipeline. Every entry is a stable,
//! well-known object with a public image, which keeps the detail fetches
//! likely to succeed even when the listing or search endpoints are failing.

/// Known-good object IDs, in curation order.
pub const FALLBACK_OBJECT_IDS: &[u64] = &[
    // European Paintings
    436535, // Wheat Field with Cypresses, Vincent van Gogh
    436532, // Self-Portrait with a Straw Hat, Vincent van Gogh
    436105, // The Death of Socrates, Jacques Louis David
    437853, // Study of a Young Woman, Johannes Vermeer
    436964, // The Harvesters, Pieter Bruegel the Elder
    437329, // Bridge over a Pond of Water Lilies, Claude Monet
    437394, // Aristotle with a Bust of Homer, Rembrandt van Rijn
    // The American Wing
    11417, // Washington Crossing the Delaware, Emanuel Leutze
    12127, // Madame X (Madame Pierre Gautreau), John Singer Sargent
    11122, // The Gulf Stream, Winslow Homer
    // Asian Art
    45434, // Under the Wave off Kanagawa (The Great Wave), Katsushika Hokusai
    // Egyptian Art
    547802, // The Temple of Dendur
];
