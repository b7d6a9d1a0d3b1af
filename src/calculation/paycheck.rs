//! Per-paycheck benefits cost calculation.
//!
//! This module contains the core rule set that turns an employee's salary
//! and dependent list into a deterministic per-paycheck deduction.

use chrono::NaiveDate;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::config::BenefitRates;
use crate::models::Employee;

use super::age::calendar_year_age;

const MONTHS_PER_YEAR: Decimal = Decimal::from_parts(12, 0, 0, false, 0);

/// Calculates the per-paycheck benefits deduction for an employee.
///
/// The calculation is pure and deterministic: the reference date `as_of`
/// is an explicit input, so the same employee evaluated against the same
/// date always yields the same amount regardless of the wall clock.
///
/// Rules, all in exact decimal arithmetic:
/// 1. Every employee pays the base monthly cost, annualized.
/// 2. Every dependent adds the dependent monthly cost, annualized.
/// 3. A dependent strictly older than the elder age threshold (calendar-year
///    age, see [`calendar_year_age`]) adds the elder monthly surcharge,
///    annualized.
/// 4. A salary strictly above the high-salary threshold adds a fraction of
///    the annual salary.
/// 5. The annual total is divided by the paychecks-per-year divisor and
///    rounded to cents, half away from zero.
///
/// The order of dependents never affects the result.
///
/// # Arguments
///
/// * `employee` - The employee with their resolved dependent list
/// * `rates` - The process-wide benefit rate table
/// * `as_of` - The reference date for dependent ages
///
/// # Examples
///
/// ```
/// use benefits_engine::calculation::calculate_paycheck;
/// use benefits_engine::config::BenefitRates;
/// use benefits_engine::models::Employee;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let employee = Employee {
///     id: 1,
///     first_name: "LeBron".to_string(),
///     last_name: "James".to_string(),
///     salary: Decimal::from_str("75420.99").unwrap(),
///     date_of_birth: NaiveDate::from_ymd_opt(1984, 12, 30).unwrap(),
///     dependents: vec![],
/// };
///
/// let as_of = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
/// let amount = calculate_paycheck(&employee, &BenefitRates::default(), as_of);
/// assert_eq!(amount, Decimal::from_str("461.54").unwrap());
/// ```
pub fn calculate_paycheck(
    employee: &Employee,
    rates: &BenefitRates,
    as_of: NaiveDate,
) -> Decimal {
    let mut annual_cost = rates.base_monthly_cost * MONTHS_PER_YEAR;

    for dependent in &employee.dependents {
        annual_cost += rates.dependent_monthly_cost * MONTHS_PER_YEAR;

        let age = calendar_year_age(dependent.date_of_birth, as_of);
        if age > rates.elder_dependent_age {
            annual_cost += rates.elder_dependent_monthly_surcharge * MONTHS_PER_YEAR;
        }
    }

    if employee.salary > rates.high_salary_threshold {
        annual_cost += employee.salary * rates.high_salary_surcharge_rate;
    }

    let per_paycheck = annual_cost / rates.paychecks_per_year;
    per_paycheck.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}
