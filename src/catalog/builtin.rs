//! The phrase table shipped with the application

use super::models::{PhraseCatalog, PhraseEntry, BASMALA};

/// (phrase, gloss, default Alt+ key)
const PHRASES: &[(&str, &str, &str)] = &[
    ("ﷺ", "Sallá Allāhu ʿAlayhī wa as-Salam (May Allāh's praise & salutations be upon him)", "1"),
    ("ﷻ", "Jalla Jalāluhu (Exalted is His Majesty)", "2"),
    ("سُبْحَانَهُ وَ تَعَالَى", "Subḥānahu wa Taʾālá (Glorious and Exalted is He)", "3"),
    ("عَزَّ وَ جَلّ", "ʿAzza wa Jal (The Mighty and Majestic)", "4"),
    ("رَضِيَ الله عَنْهُ", "Raḍī Allāhu ʿAnhu (May Allāh be pleased with him)", "5"),
    ("رَضِيَ اللهُ عَنْهَا", "Raḍī Allāhu ʿAnhā (May Allāh be pleased with her)", "6"),
    ("رَحِمَهُ الله", "Raḥimahullāh (May Allah have mercy on him)", "7"),
    ("حَفِظَهُ الله", "Ḥafiẓahullāh (May Allah preserve him)", "8"),
    ("عَلَيْهِ السَّلام", "ʿAlayhī as-Salām (Peace be upon him)", "9"),
    ("الحَمْدُ لله", "Alḥamdulillāh (All praises and thanks are due to Allāh)", "0"),
    ("جَزَاكَ اللهُ خَيْرَاً", "Jazāk Allāhu Khairan (May Allāh give you good)", "-"),
    ("بَارَكَ اللهُ فِيكَ", "Bārak Allāhu Fīk (May Allāh bless you)", "="),
    ("السَّلَامُ عَلَيْكُم", "As Salāmu 'Alaikum (Peace be upon you)", "["),
    ("إِن شَاءَ الله", "ʾIn shāʾ Allāh (If Allāh wills)", "]"),
    ("رَضِيَ اللهُ عَنْهُمَا", "Raḍī Allāhu ʿAnhumā (May Allāh be pleased with them)", ";"),
    (BASMALA, "Bismillāh ir-Raḥmān ir-Raḥīm", "'"),
];

/// Gloss shown while nothing is hovered
pub const PLACEHOLDER_GLOSS: &str = "Hover over a phrase to see its meaning";

impl PhraseCatalog {
    pub fn builtin() -> Self {
        PhraseCatalog::new(
            PHRASES
                .iter()
                .map(|(phrase, gloss, key)| PhraseEntry::new(*phrase, *gloss).with_hotkey(*key))
                .collect(),
        )
    }
}
