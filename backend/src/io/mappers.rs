//! Mapping between domain models and shared DTOs.

use shared::TripRecord;

use crate::domain::models::LedgerEntry;

pub struct TripMapper;

impl TripMapper {
    /// Convert a ledger entry into the tabular display record.
    pub fn to_record(entry: &LedgerEntry) -> TripRecord {
        TripRecord {
            departure: entry.trip.departure,
            return_date: entry.trip.return_date,
            planned: entry.trip.planned,
            length: entry.trip.length(),
            balance_after: entry.balance_after,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::Trip;
    use chrono::NaiveDate;

    #[test]
    fn test_to_record() {
        let entry = LedgerEntry {
            trip: Trip::planned(
                "2025-01-05".parse::<NaiveDate>().unwrap(),
                "2025-01-09".parse::<NaiveDate>().unwrap(),
            ),
            balance_after: 174,
        };

        let record = TripMapper::to_record(&entry);
        assert_eq!(record.length, 3);
        assert_eq!(record.balance_after, 174);
        assert!(record.planned);
    }
}
