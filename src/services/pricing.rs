//! Line pricing shared by purchase order and invoice lines.
//!
//! Amounts are carried at full decimal precision; nothing is rounded here.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Serialize;

const HUNDRED: Decimal = dec!(100);

/// Amounts derived from a priced line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LineAmounts {
    /// `qty * unit_price`
    pub gross: Decimal,
    pub discount: Decimal,
    /// Gross less discount. Tax is charged on this amount.
    pub net: Decimal,
    pub tax: Decimal,
    /// Net plus tax.
    pub total: Decimal,
}

impl LineAmounts {
    pub fn compute(qty: Decimal, unit_price: Decimal, discount_pct: Decimal, gst_pct: Decimal) -> Self {
        let gross = qty * unit_price;
        let discount = gross * discount_pct / HUNDRED;
        let net = gross - discount;
        let tax = net * gst_pct / HUNDRED;
        Self {
            gross,
            discount,
            net,
            tax,
            total: net + tax,
        }
    }
}

/// Value of a purchase order line including tax.
pub fn po_line_value(
    ordered_qty: Decimal,
    net_price: Decimal,
    discount_pct: Decimal,
    gst_pct: Decimal,
) -> Decimal {
    LineAmounts::compute(ordered_qty, net_price, discount_pct, gst_pct).total
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn discount_applies_before_tax() {
        let amounts = LineAmounts::compute(dec!(10), dec!(100), dec!(10), dec!(18));
        assert_eq!(amounts.gross, dec!(1000));
        assert_eq!(amounts.discount, dec!(100));
        assert_eq!(amounts.net, dec!(900));
        assert_eq!(amounts.tax, dec!(162));
        assert_eq!(amounts.total, dec!(1062));
    }

    #[rstest]
    #[case(dec!(10), dec!(100), dec!(0), dec!(0), dec!(1000))]
    #[case(dec!(5), dec!(200), dec!(0), dec!(18), dec!(1180))]
    #[case(dec!(2), dec!(50), dec!(100), dec!(18), dec!(0))]
    #[case(dec!(3), dec!(0), dec!(25), dec!(12), dec!(0))]
    #[case(dec!(1.5), dec!(10), dec!(50), dec!(0), dec!(7.5))]
    fn po_line_values(
        #[case] qty: Decimal,
        #[case] price: Decimal,
        #[case] discount: Decimal,
        #[case] gst: Decimal,
        #[case] expected: Decimal,
    ) {
        assert_eq!(po_line_value(qty, price, discount, gst), expected);
    }

    #[test]
    fn amounts_are_not_rounded() {
        let amounts = LineAmounts::compute(dec!(3), dec!(3.333), dec!(0), dec!(12.5));
        assert_eq!(amounts.net, dec!(9.999));
        assert_eq!(amounts.tax, dec!(1.249875));
        assert_eq!(amounts.total, dec!(11.248875));
    }
}
