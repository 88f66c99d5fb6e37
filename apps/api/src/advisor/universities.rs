//! Static university reference tables and the positional selector.
//!
//! One editorially ordered list per career interest. Each list runs from
//! reach-style picks at the front to safer, cheaper picks at the back, so the
//! selector can slice positionally instead of scoring: a stressed user gets
//! the closing (safer) end of the table, everyone else gets the front.
//! The tables are read-only after startup; there is no runtime mutation.

use serde::Serialize;

use crate::advisor::emotion::EmotionLabel;
use crate::advisor::interest::CareerLabel;

/// Qualitative rating used for both admission risk and cost.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Rating {
    Low,
    Medium,
    High,
}

/// Static reference entry for one university.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct UniversityRecord {
    pub name: &'static str,
    pub country: &'static str,
    pub risk: Rating,
    pub cost: Rating,
}

const fn uni(name: &'static str, country: &'static str, risk: Rating, cost: Rating) -> UniversityRecord {
    UniversityRecord {
        name,
        country,
        risk,
        cost,
    }
}

const ENGINEERING_TABLE: &[UniversityRecord] = &[
    uni("Massachusetts Institute of Technology", "United States", Rating::High, Rating::High),
    uni("Stanford University", "United States", Rating::High, Rating::High),
    uni("ETH Zurich", "Switzerland", Rating::High, Rating::Low),
    uni("TU Berlin", "Germany", Rating::Medium, Rating::Low),
    uni("University of Toronto", "Canada", Rating::Medium, Rating::Medium),
    uni("University of Waterloo", "Canada", Rating::Low, Rating::Medium),
];

const MEDICAL_TABLE: &[UniversityRecord] = &[
    uni("Johns Hopkins University", "United States", Rating::High, Rating::High),
    uni("Karolinska Institute", "Sweden", Rating::High, Rating::Low),
    uni("University of Edinburgh", "United Kingdom", Rating::Medium, Rating::High),
    uni("Charite Berlin", "Germany", Rating::Medium, Rating::Low),
    uni("McMaster University", "Canada", Rating::Medium, Rating::Medium),
    uni("University of Otago", "New Zealand", Rating::Low, Rating::Medium),
];

const MANAGEMENT_TABLE: &[UniversityRecord] = &[
    uni("Harvard Business School", "United States", Rating::High, Rating::High),
    uni("INSEAD", "France", Rating::High, Rating::High),
    uni("London Business School", "United Kingdom", Rating::High, Rating::High),
    uni("Rotterdam School of Management", "Netherlands", Rating::Medium, Rating::Medium),
    uni("Copenhagen Business School", "Denmark", Rating::Medium, Rating::Low),
    uni("University of British Columbia", "Canada", Rating::Low, Rating::Medium),
];

const POLITICAL_TABLE: &[UniversityRecord] = &[
    uni("Sciences Po", "France", Rating::High, Rating::Medium),
    uni("Georgetown University", "United States", Rating::High, Rating::High),
    uni("London School of Economics", "United Kingdom", Rating::High, Rating::High),
    uni("Hertie School", "Germany", Rating::Medium, Rating::Low),
    uni("Australian National University", "Australia", Rating::Medium, Rating::Medium),
    uni("Uppsala University", "Sweden", Rating::Low, Rating::Low),
];

const ARTS_TABLE: &[UniversityRecord] = &[
    uni("Rhode Island School of Design", "United States", Rating::High, Rating::High),
    uni("Central Saint Martins", "United Kingdom", Rating::High, Rating::High),
    uni("Parsons School of Design", "United States", Rating::Medium, Rating::High),
    uni("Aalto University", "Finland", Rating::Medium, Rating::Low),
    uni("OCAD University", "Canada", Rating::Low, Rating::Medium),
];

const MUSIC_TABLE: &[UniversityRecord] = &[
    uni("The Juilliard School", "United States", Rating::High, Rating::High),
    uni("Berklee College of Music", "United States", Rating::High, Rating::High),
    uni("Royal College of Music", "United Kingdom", Rating::Medium, Rating::High),
    uni("University of Music and Performing Arts Vienna", "Austria", Rating::Medium, Rating::Low),
    uni("Sibelius Academy", "Finland", Rating::Medium, Rating::Low),
    uni("Royal Conservatoire of Scotland", "United Kingdom", Rating::Low, Rating::Medium),
];

const DANCE_TABLE: &[UniversityRecord] = &[
    uni("The Juilliard School", "United States", Rating::High, Rating::High),
    uni("Royal Ballet School", "United Kingdom", Rating::High, Rating::Medium),
    uni("Trinity Laban Conservatoire", "United Kingdom", Rating::Medium, Rating::Medium),
    uni("Palucca University of Dance", "Germany", Rating::Medium, Rating::Low),
    uni("Codarts Rotterdam", "Netherlands", Rating::Low, Rating::Medium),
];

const LAW_TABLE: &[UniversityRecord] = &[
    uni("Harvard Law School", "United States", Rating::High, Rating::High),
    uni("University of Oxford", "United Kingdom", Rating::High, Rating::High),
    uni("LMU Munich", "Germany", Rating::Medium, Rating::Low),
    uni("National University of Singapore", "Singapore", Rating::Medium, Rating::Medium),
    uni("University of Melbourne", "Australia", Rating::Medium, Rating::Medium),
    uni("Leiden University", "Netherlands", Rating::Low, Rating::Low),
];

/// Returns the static table for a career interest. General has no table.
pub fn table_for(interest: CareerLabel) -> &'static [UniversityRecord] {
    match interest {
        CareerLabel::Engineering => ENGINEERING_TABLE,
        CareerLabel::Medical => MEDICAL_TABLE,
        CareerLabel::Management => MANAGEMENT_TABLE,
        CareerLabel::Political => POLITICAL_TABLE,
        CareerLabel::Arts => ARTS_TABLE,
        CareerLabel::Music => MUSIC_TABLE,
        CareerLabel::Dance => DANCE_TABLE,
        CareerLabel::Law => LAW_TABLE,
        CareerLabel::General => &[],
    }
}

/// Selects up to three universities for the given interest and emotion.
///
/// Stressed users get the last three entries of the table (order preserved,
/// the safer end); everyone else gets the first three. Shorter tables return
/// as many entries as they hold.
pub fn recommend(interest: CareerLabel, emotion: EmotionLabel) -> Vec<UniversityRecord> {
    pick(table_for(interest), emotion)
}

fn pick(table: &[UniversityRecord], emotion: EmotionLabel) -> Vec<UniversityRecord> {
    let slice = if emotion == EmotionLabel::Stressed {
        &table[table.len().saturating_sub(3)..]
    } else {
        &table[..table.len().min(3)]
    };
    slice.to_vec()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stressed_engineering_gets_closing_entries() {
        let picks = recommend(CareerLabel::Engineering, EmotionLabel::Stressed);
        let names: Vec<&str> = picks.iter().map(|u| u.name).collect();
        assert_eq!(
            names,
            vec![
                "TU Berlin",
                "University of Toronto",
                "University of Waterloo"
            ]
        );
    }

    #[test]
    fn test_non_stressed_gets_front_entries() {
        let picks = recommend(CareerLabel::Engineering, EmotionLabel::Ambition);
        let names: Vec<&str> = picks.iter().map(|u| u.name).collect();
        assert_eq!(
            names,
            vec![
                "Massachusetts Institute of Technology",
                "Stanford University",
                "ETH Zurich"
            ]
        );
    }

    #[test]
    fn test_law_front_entries() {
        let picks = recommend(CareerLabel::Law, EmotionLabel::Neutral);
        let names: Vec<&str> = picks.iter().map(|u| u.name).collect();
        assert_eq!(
            names,
            vec!["Harvard Law School", "University of Oxford", "LMU Munich"]
        );
    }

    #[test]
    fn test_general_has_no_recommendations() {
        assert!(recommend(CareerLabel::General, EmotionLabel::Neutral).is_empty());
        assert!(recommend(CareerLabel::General, EmotionLabel::Stressed).is_empty());
    }

    #[test]
    fn test_short_table_returns_what_is_present() {
        let short = &[uni("A", "X", Rating::Low, Rating::Low), uni("B", "Y", Rating::High, Rating::High)];
        assert_eq!(pick(short, EmotionLabel::Neutral).len(), 2);
        assert_eq!(pick(short, EmotionLabel::Stressed).len(), 2);
        assert!(pick(&[], EmotionLabel::Stressed).is_empty());
    }

    #[test]
    fn test_pick_never_exceeds_table_length() {
        for interest in [
            CareerLabel::Engineering,
            CareerLabel::Medical,
            CareerLabel::Management,
            CareerLabel::Political,
            CareerLabel::Arts,
            CareerLabel::Music,
            CareerLabel::Dance,
            CareerLabel::Law,
            CareerLabel::General,
        ] {
            let table = table_for(interest);
            let picks = recommend(interest, EmotionLabel::Stressed);
            assert!(picks.len() <= table.len());
            assert!(picks.len() <= 3);
        }
    }

    #[test]
    fn test_stressed_slice_preserves_table_order() {
        let picks = recommend(CareerLabel::Law, EmotionLabel::Stressed);
        let table = table_for(CareerLabel::Law);
        assert_eq!(picks.as_slice(), &table[table.len() - 3..]);
    }

    #[test]
    fn test_rating_serializes_as_variant_name() {
        assert_eq!(serde_json::to_string(&Rating::Low).unwrap(), "\"Low\"");
        assert_eq!(serde_json::to_string(&Rating::High).unwrap(), "\"High\"");
    }
}
