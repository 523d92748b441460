use ::rand::rngs::ThreadRng;
use ::rand::{thread_rng, Rng};

use crate::currency::Amount;
use crate::drawer::{Denomination, DENOMINATIONS};
use crate::handlers;
use crate::types::{RegisterRecord, TransactionId};

struct FeedGenerator {
    tx_id: TransactionId,
    num_records: Option<TransactionId>,
    max_price: Amount,
    max_stock: u32,
}

impl FeedGenerator {
    fn new(num_records: Option<TransactionId>, max_price: Amount, max_stock: u32) -> Self {
        Self {
            tx_id: 1,
            num_records,
            max_price,
            max_stock,
        }
    }

    /// Random total value for one drawer slot: a whole number of units,
    /// so generated drawers always hold realistic stock.
    fn random_stock(&self, denomination: Denomination, rng: &mut ThreadRng) -> Amount {
        let units = i64::from(rng.gen_range(0..=self.max_stock));
        Amount::from_cents(units * denomination.unit_value().cents())
    }

    fn generate_record(&self) -> RegisterRecord {
        let mut rng = thread_rng();

        // Draw prices as whole cents to keep the feed exact.
        let price = Amount::from_cents(rng.gen_range(0..=self.max_price.cents()));
        // Tender at or above the price, up to a twenty over.
        let payment = Amount::from_cents(rng.gen_range(price.cents()..=price.cents() + 2_000));

        let [penny, nickel, dime, quarter, one, five, ten, twenty, one_hundred] = {
            let mut amounts = [Amount::zero(); 9];
            for (slot, &denomination) in amounts.iter_mut().zip(DENOMINATIONS.iter()) {
                *slot = self.random_stock(denomination, &mut rng);
            }
            amounts
        };

        RegisterRecord {
            tx_id: self.tx_id,
            price,
            payment,
            penny,
            nickel,
            dime,
            quarter,
            one,
            five,
            ten,
            twenty,
            one_hundred,
        }
    }
}

impl Iterator for FeedGenerator {
    type Item = RegisterRecord;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(desired) = self.num_records {
            // Maybe break early
            if self.tx_id > desired {
                return None;
            }
        }

        let record = self.generate_record();

        // Generated records carry no negative amounts, so every one of
        // them must be computable.
        handlers::handle_record(&record).expect("Generated invalid register record");

        self.tx_id += 1;
        Some(record)
    }
}

/// Generate random register feed records.
/// Any drawer status may come out the other end; what is guaranteed is
/// that every record is well-formed input for the engine.
pub fn generate_random_register_feed(
    num_records: Option<TransactionId>,
    max_price: Amount,
    max_stock: u32,
) -> impl Iterator<Item = RegisterRecord> {
    FeedGenerator::new(num_records, max_price, max_stock)
}
