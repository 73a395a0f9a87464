//! The classic 40-space layout.

use crate::player::Money;
use crate::property::ColorGroup;

use ColorGroup::{Brown, DarkBlue, Green, LightBlue, Orange, Pink, Red, Yellow};
use Descriptor::{
    Chance, CommunityChest, FreeParking, Go, GoToJail, IncomeTax, Jail, LuxuryTax, Railroad,
    Street, Utility,
};

/// Static description of one space, before any game state exists.
#[derive(Debug, Clone, Copy)]
pub(super) enum Descriptor {
    Go,
    Street(ColorGroup, Money, [Money; 6]),
    Railroad,
    Utility,
    IncomeTax,
    LuxuryTax,
    Chance,
    CommunityChest,
    Jail,
    FreeParking,
    GoToJail,
}

pub(super) const RAILROAD_PRICE: Money = 200;
pub(super) const UTILITY_PRICE: Money = 150;

pub(super) const CLASSIC: [(&str, Descriptor); 40] = [
    ("Go", Go),
    ("Mediterranean Avenue", Street(Brown, 60, [2, 10, 30, 90, 160, 250])),
    ("Community Chest", CommunityChest),
    ("Baltic Avenue", Street(Brown, 60, [4, 20, 60, 180, 320, 450])),
    ("Income Tax", IncomeTax),
    ("Reading Railroad", Railroad),
    ("Oriental Avenue", Street(LightBlue, 100, [6, 30, 90, 270, 400, 550])),
    ("Chance", Chance),
    ("Vermont Avenue", Street(LightBlue, 100, [6, 30, 90, 270, 400, 550])),
    ("Connecticut Avenue", Street(LightBlue, 120, [8, 40, 100, 300, 450, 600])),
    ("Jail", Jail),
    ("St. Charles Place", Street(Pink, 140, [10, 50, 150, 450, 625, 750])),
    ("Electric Company", Utility),
    ("States Avenue", Street(Pink, 140, [10, 50, 150, 450, 625, 750])),
    ("Virginia Avenue", Street(Pink, 160, [12, 60, 180, 500, 700, 900])),
    ("Pennsylvania Railroad", Railroad),
    ("St. James Place", Street(Orange, 180, [14, 70, 200, 550, 750, 950])),
    ("Community Chest", CommunityChest),
    ("Tennessee Avenue", Street(Orange, 180, [14, 70, 200, 550, 750, 950])),
    ("New York Avenue", Street(Orange, 200, [16, 80, 220, 600, 800, 1000])),
    ("Free Parking", FreeParking),
    ("Kentucky Avenue", Street(Red, 220, [18, 90, 250, 700, 875, 1050])),
    ("Chance", Chance),
    ("Indiana Avenue", Street(Red, 220, [18, 90, 250, 700, 875, 1050])),
    ("Illinois Avenue", Street(Red, 240, [20, 100, 300, 750, 925, 1100])),
    ("B. & O. Railroad", Railroad),
    ("Atlantic Avenue", Street(Yellow, 260, [22, 110, 330, 800, 975, 1150])),
    ("Ventnor Avenue", Street(Yellow, 260, [22, 110, 330, 800, 975, 1150])),
    ("Water Works", Utility),
    ("Marvin Gardens", Street(Yellow, 280, [24, 120, 360, 850, 1025, 1200])),
    ("Go To Jail", GoToJail),
    ("Pacific Avenue", Street(Green, 300, [26, 130, 390, 900, 1100, 1275])),
    ("North Carolina Avenue", Street(Green, 300, [26, 130, 390, 900, 1100, 1275])),
    ("Community Chest", CommunityChest),
    ("Pennsylvania Avenue", Street(Green, 320, [28, 150, 450, 1000, 1200, 1400])),
    ("Short Line", Railroad),
    ("Chance", Chance),
    ("Park Place", Street(DarkBlue, 350, [35, 175, 500, 1100, 1300, 1500])),
    ("Luxury Tax", LuxuryTax),
    ("Boardwalk", Street(DarkBlue, 400, [50, 200, 600, 1400, 1700, 2000])),
];
