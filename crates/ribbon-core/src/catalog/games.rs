//! Bundled game titles.

use super::types::Game;

fn game(
    id: &str,
    name: &str,
    short_name: &str,
    generation: u32,
    release_date: &str,
    platform: &str,
) -> Game {
    Game {
        id: id.to_string(),
        name: name.to_string(),
        short_name: short_name.to_string(),
        generation,
        release_date: release_date.to_string(),
        platform: platform.to_string(),
    }
}

pub(crate) fn games() -> Vec<Game> {
    vec![
        // Gen 3 (GBA)
        game("ruby", "Pokémon Ruby", "Ruby", 3, "2002-11-21", "GBA"),
        game("sapphire", "Pokémon Sapphire", "Sapphire", 3, "2002-11-21", "GBA"),
        game("emerald", "Pokémon Emerald", "Emerald", 3, "2004-09-16", "GBA"),
        game("firered", "Pokémon FireRed", "FR", 3, "2004-01-29", "GBA"),
        game("leafgreen", "Pokémon LeafGreen", "LG", 3, "2004-01-29", "GBA"),
        // Gen 3 (GCN)
        game("colosseum", "Pokémon Colosseum", "Colosseum", 3, "2003-11-21", "GCN"),
        game("xd", "Pokémon XD: Gale of Darkness", "XD", 3, "2005-08-04", "GCN"),
        // Gen 4
        game("diamond", "Pokémon Diamond", "Diamond", 4, "2006-09-28", "DS"),
        game("pearl", "Pokémon Pearl", "Pearl", 4, "2006-09-28", "DS"),
        game("platinum", "Pokémon Platinum", "Platinum", 4, "2008-09-13", "DS"),
        game("heartgold", "Pokémon HeartGold", "HeartGold", 4, "2009-09-12", "DS"),
        game("soulsilver", "Pokémon SoulSilver", "SoulSilver", 4, "2009-09-12", "DS"),
        // Gen 5
        game("black", "Pokémon Black", "Black", 5, "2010-09-18", "DS"),
        game("white", "Pokémon White", "White", 5, "2010-09-18", "DS"),
        game("black2", "Pokémon Black 2", "Black 2", 5, "2012-06-23", "DS"),
        game("white2", "Pokémon White 2", "White 2", 5, "2012-06-23", "DS"),
        // Gen 6
        game("x", "Pokémon X", "X", 6, "2013-10-12", "3DS"),
        game("y", "Pokémon Y", "Y", 6, "2013-10-12", "3DS"),
        game(
            "oras",
            "Pokémon Omega Ruby / Alpha Sapphire",
            "ORAS",
            6,
            "2014-11-21",
            "3DS",
        ),
        // Gen 7
        game("sun", "Pokémon Sun", "Sun", 7, "2016-11-18", "3DS"),
        game("moon", "Pokémon Moon", "Moon", 7, "2016-11-18", "3DS"),
        game(
            "usum",
            "Pokémon Ultra Sun / Ultra Moon",
            "USUM",
            7,
            "2017-11-17",
            "3DS",
        ),
        game(
            "lets_go",
            "Pokémon: Let's Go, Pikachu! / Let's Go, Eevee!",
            "Let's Go",
            7,
            "2018-11-16",
            "Switch",
        ),
        // Gen 8
        game("sword", "Pokémon Sword", "Sword", 8, "2019-11-15", "Switch"),
        game("shield", "Pokémon Shield", "Shield", 8, "2019-11-15", "Switch"),
        game(
            "legends_arceus",
            "Pokémon Legends: Arceus",
            "PLA",
            8,
            "2022-01-28",
            "Switch",
        ),
        // Gen 9
        game("scarlet", "Pokémon Scarlet", "Scarlet", 9, "2022-11-18", "Switch"),
        game("violet", "Pokémon Violet", "Violet", 9, "2022-11-18", "Switch"),
    ]
}
