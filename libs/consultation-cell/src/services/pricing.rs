use tracing::debug;

use crate::models::{ConsultationError, ConsultationType, PriceTable};

/// Platform-wide ceiling on any consultation price, in currency units. The
/// payment provider cannot charge above this, so a price table that crosses
/// it is a misconfiguration, not a bookable amount.
pub const CONSULTATION_AMOUNT_CEILING: u32 = 1000;

/// Static consultation price table with the ceiling guard. Prices are fixed
/// per type; nothing here is computed from the request.
pub struct ConsultationPricing {
    table: PriceTable,
    ceiling: u32,
}

impl Default for ConsultationPricing {
    fn default() -> Self {
        Self {
            table: PriceTable {
                instant: 499,
                scheduled: 299,
                emergency: 999,
            },
            ceiling: CONSULTATION_AMOUNT_CEILING,
        }
    }
}

impl ConsultationPricing {
    pub fn with_table(table: PriceTable, ceiling: u32) -> Self {
        Self { table, ceiling }
    }

    /// Price for a consultation type, refusing any configured price above
    /// the ceiling.
    pub fn price_for(&self, consultation_type: ConsultationType) -> Result<u32, ConsultationError> {
        let amount = match consultation_type {
            ConsultationType::Instant => self.table.instant,
            ConsultationType::Scheduled => self.table.scheduled,
            ConsultationType::Emergency => self.table.emergency,
        };

        if amount > self.ceiling {
            return Err(ConsultationError::PriceAboveCeiling {
                consultation_type,
                amount,
                ceiling: self.ceiling,
            });
        }

        debug!("Resolved {} consultation price: {}", consultation_type, amount);
        Ok(amount)
    }

    pub fn table(&self) -> PriceTable {
        self.table
    }

    pub fn ceiling(&self) -> u32 {
        self.ceiling
    }
}
