use std::fmt;

/// Cosmetic items sold in the store.
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ItemKind {
    Groceries = 0,
    HondaCivic = 1,
    Rent = 2,
    /// Negative price: buying it credits the balance.
    PredatoryLoan = 3,
}

impl ItemKind {
    /// Every item in catalog order.
    pub const ALL: [ItemKind; 4] = [
        ItemKind::Groceries,
        ItemKind::HondaCivic,
        ItemKind::Rent,
        ItemKind::PredatoryLoan,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ItemKind::Groceries => "Groceries",
            ItemKind::HondaCivic => "2008 Honda Civic",
            ItemKind::Rent => "Rent",
            ItemKind::PredatoryLoan => "Predatory Loan",
        }
    }

    /// Price in coins. Negative prices pay the buyer.
    pub fn price(self) -> i64 {
        match self {
            ItemKind::Groceries => 30,
            ItemKind::HondaCivic => 7_072,
            ItemKind::Rent => 670,
            ItemKind::PredatoryLoan => -2_500,
        }
    }

    pub fn purchase_message(self) -> &'static str {
        match self {
            ItemKind::Groceries => "\"Hey, that looks pretty tasty!\"",
            ItemKind::HondaCivic => "\"Woah dude! That's a sick ride. Congrats!\"",
            ItemKind::Rent => "You paid rent! Your spouse and kid are going to be so proud!",
            ItemKind::PredatoryLoan => "*Sigh* \"Just sign there...\"",
        }
    }

    pub fn picture(self) -> &'static [&'static str] {
        match self {
            // Art by Hayley Jane Wakenshaw.
            ItemKind::Groceries => &[
                r"  ,--./,-.  ",
                r" / #      \ ",
                r"|          |",
                r" \        / ",
                r"  `._,._,   ",
            ],
            // Art by Colin Douthwaite.
            ItemKind::HondaCivic => &[
                r"          _______      ",
                r"         //  ||\ \     ",
                r" \ _____//___||_\ \___ ",
                r"   )  _          _    \",
                r" / |_/ \________/ \___|",
                r"     \_/        \_/    ",
            ],
            ItemKind::Rent => &[
                r"  _______   ",
                r" |WORLDS |  ",
                r"(| BEST  |) ",
                r" |RENTER |  ",
                r"  \     /   ",
                r"  `---'     ",
                r"   _|_|_    ",
            ],
            ItemKind::PredatoryLoan => &[
                r"------\ ",
                r"| 38% | ",
                r"\ APY \ ",
                r" \------",
            ],
        }
    }

    /// Looks an item up by its display name, ignoring case and surrounding whitespace.
    pub fn from_name(name: &str) -> Option<Self> {
        let wanted = name.trim();
        Self::ALL
            .into_iter()
            .find(|item| item.name().eq_ignore_ascii_case(wanted))
    }
}

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
