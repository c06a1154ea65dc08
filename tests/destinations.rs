use serde::Deserialize;
use serde_with::{formats::SpaceSeparator, serde_as, DisplayFromStr, StringWithSeparator};
use shogiban::{Coord, Kind, Position, Side};

#[serde_as]
#[derive(Deserialize)]
struct Record {
    #[serde_as(as = "DisplayFromStr")]
    side: Side,
    #[serde_as(as = "DisplayFromStr")]
    kind: Kind,
    #[serde_as(as = "DisplayFromStr")]
    from: Coord,
    #[serde_as(as = "StringWithSeparator<SpaceSeparator, Coord>")]
    friends: Vec<Coord>,
    #[serde_as(as = "StringWithSeparator<SpaceSeparator, Coord>")]
    enemies: Vec<Coord>,
    #[serde_as(as = "StringWithSeparator<SpaceSeparator, Coord>")]
    expected: Vec<Coord>,
}

#[test]
fn test_destination_fixtures() {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(b';')
        .from_path("tests/destinations.csv")
        .expect("reader");

    for (i, record) in reader.deserialize().enumerate() {
        let record: Record = record.expect("record");

        let mut pos = Position::empty();
        pos.add_piece(record.kind.at(record.side, record.from)).expect("free tile");
        for friend in record.friends {
            pos.add_piece(Kind::Gold.at(record.side, friend)).expect("free tile");
        }
        for enemy in record.enemies {
            pos.add_piece(Kind::Gold.at(!record.side, enemy)).expect("free tile");
        }

        let mut dests = pos.legal_destinations(record.from).expect("occupied").to_vec();
        dests.sort();

        assert_eq!(
            dests,
            record.expected,
            "line {}: {} {} on {}",
            i + 2,
            record.side,
            record.kind,
            record.from
        );
    }
}
