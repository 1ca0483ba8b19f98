/// Static lexicons backing the pattern recognizer.
///
/// Deliberately small: the lists cover vocabulary that shows up in typical
/// clinical notes, not the open world. Entries are matched
/// case-sensitively and whole-word; multi-word entries are listed before
/// their prefixes so alternation picks the longer form.
pub struct Lexicon;

impl Lexicon {
    /// Common given names used to anchor person detection when no
    /// honorific or role word precedes the name.
    pub fn given_names() -> &'static [&'static str] {
        &[
            "James", "Mary", "Robert", "Patricia", "John", "Jennifer", "Michael", "Linda",
            "David", "Elizabeth", "William", "Barbara", "Richard", "Susan", "Joseph", "Jessica",
            "Thomas", "Sarah", "Charles", "Karen", "Christopher", "Lisa", "Daniel", "Nancy",
            "Matthew", "Betty", "Anthony", "Margaret", "Mark", "Sandra", "Donald", "Ashley",
            "Steven", "Kimberly", "Paul", "Emily", "Andrew", "Donna", "Joshua", "Michelle",
            "Kenneth", "Carol", "Kevin", "Amanda", "Brian", "Dorothy", "George", "Melissa",
            "Jane", "Deborah",
        ]
    }

    /// Cities, states, and countries
    pub fn places() -> &'static [&'static str] {
        &[
            "New York City", "New York", "Los Angeles", "San Francisco", "Chicago", "Houston",
            "Boston", "Seattle", "Denver", "Miami", "Atlanta", "Philadelphia", "Phoenix",
            "Dallas", "Portland", "Cleveland", "Baltimore", "Minneapolis",
            "California", "Texas", "Florida", "Ohio", "Michigan", "Georgia", "Virginia",
            "Washington", "Oregon", "Arizona", "Colorado", "Massachusetts", "Pennsylvania",
            "United States", "Canada", "Mexico", "Germany", "France", "Spain", "Italy",
            "United Kingdom", "England", "Ireland", "India", "China", "Japan", "Brazil",
        ]
    }

    /// Non-political locations: regions and landmarks
    pub fn regions() -> &'static [&'static str] {
        &[
            "Pacific Northwest", "East Coast", "West Coast", "Gulf Coast", "Midwest",
            "New England", "Rocky Mountains", "Great Lakes", "Bay Area",
        ]
    }

    /// Nationalities, religious and political groups
    pub fn nationalities() -> &'static [&'static str] {
        &[
            "American", "Canadian", "Mexican", "British", "English", "Irish", "Scottish",
            "German", "French", "Spanish", "Italian", "Indian", "Chinese", "Japanese",
            "Korean", "Brazilian", "Russian", "Polish", "Dutch", "Swedish", "Hispanic",
            "Latino", "Catholic", "Protestant", "Jewish", "Muslim",
        ]
    }
}
