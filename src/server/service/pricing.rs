//! Price calculation for cart lines and bookings.
//!
//! All amounts are integer minor currency units. Transport multipliers are whole
//! percentages applied with half-up rounding, so the same inputs always give the same
//! price. Nothing here touches the database; callers load the catalog row first and
//! describe it as a [`Priceable`].

use chrono::NaiveDate;

use crate::server::{error::pricing::PricingError, model::cart::Pax};

/// Catalog prices needed to quote one product.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Priceable {
    Package {
        price: i64,
        discounted_price: Option<i64>,
        child_price: Option<i64>,
    },
    Tour {
        price: i64,
        child_price: Option<i64>,
    },
    /// Whole-hotel booking at the hotel's base nightly rate.
    Hotel { base_price: i64 },
    /// Nightly room rate.
    Room { price: i64 },
    /// Per-traveller visa fee.
    Visa { price: i64 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriceRequest {
    pub pax: Pax,
    pub quantity: i32,
    pub check_in: Option<NaiveDate>,
    pub check_out: Option<NaiveDate>,
    /// Percentage of the selected transport type; only packages and tours use it.
    pub multiplier_percent: Option<i32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Quote {
    pub unit_price: i64,
    pub total_price: i64,
}

/// Prices one cart line.
///
/// # Returns
/// - `Ok(Quote)` - Unit price for one set of travellers and the total for `quantity`
/// - `Err(PricingError)` - Counts, dates or multiplier are not acceptable
pub fn quote(item: &Priceable, request: &PriceRequest) -> Result<Quote, PricingError> {
    if request.quantity < 1 {
        return Err(PricingError::InvalidQuantity);
    }
    let pax = request.pax;
    if pax.adults < 0 || pax.children < 0 || pax.infants < 0 {
        return Err(PricingError::NegativeTravellers);
    }

    let unit_price = match *item {
        Priceable::Package {
            price,
            discounted_price,
            child_price,
        } => {
            let base = discounted_price.unwrap_or(price);
            let child = child_price.unwrap_or(base / 2);
            let amount = party_price(base, child, pax)?;
            apply_multiplier(amount, request.multiplier_percent)?
        }
        Priceable::Tour { price, child_price } => {
            let child = child_price.unwrap_or(price);
            let amount = party_price(price, child, pax)?;
            apply_multiplier(amount, request.multiplier_percent)?
        }
        Priceable::Hotel { base_price } => {
            let nights = nights(request.check_in, request.check_out)?;
            checked_mul(base_price, nights)?
        }
        Priceable::Room { price } => {
            let nights = nights(request.check_in, request.check_out)?;
            checked_mul(price, nights)?
        }
        Priceable::Visa { price } => {
            let travellers = i64::from(pax.total().max(1));
            checked_mul(price, travellers)?
        }
    };

    Ok(Quote {
        unit_price,
        total_price: line_total(unit_price, request.quantity)?,
    })
}

/// Total of a line after its quantity changes.
pub fn line_total(unit_price: i64, quantity: i32) -> Result<i64, PricingError> {
    if quantity < 1 {
        return Err(PricingError::InvalidQuantity);
    }

    checked_mul(unit_price, i64::from(quantity))
}

/// Number of nights between check-in and check-out.
///
/// # Returns
/// - `Ok(nights)` - At least one night
/// - `Err(PricingError::MissingStayDates)` - Either date is missing
/// - `Err(PricingError::InvalidStay)` - Check-out is not after check-in
pub fn nights(
    check_in: Option<NaiveDate>,
    check_out: Option<NaiveDate>,
) -> Result<i64, PricingError> {
    let (Some(check_in), Some(check_out)) = (check_in, check_out) else {
        return Err(PricingError::MissingStayDates);
    };

    let nights = (check_out - check_in).num_days();
    if nights < 1 {
        return Err(PricingError::InvalidStay);
    }

    Ok(nights)
}

fn party_price(adult: i64, child: i64, pax: Pax) -> Result<i64, PricingError> {
    if pax.adults < 1 {
        return Err(PricingError::MissingAdults);
    }

    let adults = checked_mul(adult, i64::from(pax.adults))?;
    let children = checked_mul(child, i64::from(pax.children))?;

    adults.checked_add(children).ok_or(PricingError::Overflow)
}

fn apply_multiplier(amount: i64, percent: Option<i32>) -> Result<i64, PricingError> {
    let Some(percent) = percent else {
        return Ok(amount);
    };
    if percent < 1 {
        return Err(PricingError::InvalidMultiplier);
    }

    let scaled = checked_mul(amount, i64::from(percent))?
        .checked_add(50)
        .ok_or(PricingError::Overflow)?;

    Ok(scaled / 100)
}

fn checked_mul(a: i64, b: i64) -> Result<i64, PricingError> {
    a.checked_mul(b).ok_or(PricingError::Overflow)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pax(adults: i32, children: i32, infants: i32) -> Pax {
        Pax {
            adults,
            children,
            infants,
        }
    }

    fn request(pax: Pax, quantity: i32) -> PriceRequest {
        PriceRequest {
            pax,
            quantity,
            check_in: None,
            check_out: None,
            multiplier_percent: None,
        }
    }

    fn date(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2030, 6, day).unwrap()
    }

    #[test]
    fn package_uses_discount_and_half_price_children() {
        let package = Priceable::Package {
            price: 100_000,
            discounted_price: Some(80_000),
            child_price: None,
        };

        let quote = quote(&package, &request(pax(2, 1, 1), 2)).unwrap();

        assert_eq!(quote.unit_price, 200_000);
        assert_eq!(quote.total_price, 400_000);
    }

    #[test]
    fn package_prefers_explicit_child_price() {
        let package = Priceable::Package {
            price: 100_000,
            discounted_price: None,
            child_price: Some(30_000),
        };

        let quote = quote(&package, &request(pax(1, 2, 0), 1)).unwrap();

        assert_eq!(quote.unit_price, 160_000);
    }

    #[test]
    fn transport_multiplier_rounds_half_up() {
        let tour = Priceable::Tour {
            price: 1_001,
            child_price: None,
        };
        let mut req = request(pax(1, 0, 0), 1);
        req.multiplier_percent = Some(150);

        let quote = quote(&tour, &req).unwrap();

        // 1001 * 1.5 = 1501.5
        assert_eq!(quote.unit_price, 1_502);
    }

    #[test]
    fn tour_children_pay_adult_price_by_default() {
        let tour = Priceable::Tour {
            price: 20_000,
            child_price: None,
        };

        let quote = quote(&tour, &request(pax(2, 2, 1), 1)).unwrap();

        assert_eq!(quote.unit_price, 80_000);
    }

    #[test]
    fn package_and_tour_need_an_adult() {
        let tour = Priceable::Tour {
            price: 20_000,
            child_price: None,
        };

        assert_eq!(
            quote(&tour, &request(pax(0, 2, 0), 1)),
            Err(PricingError::MissingAdults)
        );
    }

    #[test]
    fn room_is_priced_per_night() {
        let room = Priceable::Room { price: 40_000 };
        let mut req = request(pax(2, 0, 0), 1);
        req.check_in = Some(date(1));
        req.check_out = Some(date(4));

        let quote = quote(&room, &req).unwrap();

        assert_eq!(quote.unit_price, 120_000);
    }

    #[test]
    fn stay_requires_at_least_one_night() {
        let hotel = Priceable::Hotel { base_price: 50_000 };
        let mut req = request(pax(2, 0, 0), 1);
        req.check_in = Some(date(4));
        req.check_out = Some(date(4));

        assert_eq!(quote(&hotel, &req), Err(PricingError::InvalidStay));

        req.check_out = None;
        assert_eq!(quote(&hotel, &req), Err(PricingError::MissingStayDates));
    }

    #[test]
    fn visa_counts_every_traveller_with_a_minimum_of_one() {
        let visa = Priceable::Visa { price: 15_000 };

        let family = quote(&visa, &request(pax(2, 1, 1), 1)).unwrap();
        let nobody = quote(&visa, &request(pax(0, 0, 0), 1)).unwrap();

        assert_eq!(family.unit_price, 60_000);
        assert_eq!(nobody.unit_price, 15_000);
    }

    #[test]
    fn rejects_bad_quantity_and_negative_counts() {
        let visa = Priceable::Visa { price: 15_000 };

        assert_eq!(
            quote(&visa, &request(pax(1, 0, 0), 0)),
            Err(PricingError::InvalidQuantity)
        );
        assert_eq!(
            quote(&visa, &request(pax(1, -1, 0), 1)),
            Err(PricingError::NegativeTravellers)
        );
    }

    #[test]
    fn detects_overflow() {
        let room = Priceable::Room { price: i64::MAX };
        let mut req = request(pax(1, 0, 0), 1);
        req.check_in = Some(date(1));
        req.check_out = Some(date(3));

        assert_eq!(quote(&room, &req), Err(PricingError::Overflow));
    }
}
