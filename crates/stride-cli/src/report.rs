// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! Console output for the stepper demonstrations. Each section runs the
//! stepper twice per domain, once within range and once deliberately past
//! the bound, and prints both outcomes in aligned columns.

use stride_core::num::bounds::DomainBounds;
use stride_core::num::value::StepValue;
use stride_core::result::StepResult;
use stride_core::stepper::{StepRequest, divide};

const STEPS: u64 = 5;
const BANNER_WIDTH: usize = 50;

pub fn print_banner(title: &str) {
    let star_line = "*".repeat(BANNER_WIDTH);
    println!();
    println!("{}", star_line);
    println!("*** {} ***", title);
    println!("{}", star_line);
}

fn print_header() {
    println!("{:<7} | {:<11} | {}", "Domain", "Steps", "Outcome");
    println!("{}", "-".repeat(72));
}

fn describe<T>(outcome: StepResult<T>) -> String
where
    T: StepValue,
{
    match outcome {
        Ok(value) => format!("{}", value),
        Err(error) => format!("prevented ({})", error),
    }
}

/// One fifth of the domain maximum, so five accumulations land on the bound
/// and a sixth must be caught.
fn fifth_of_max<T>() -> T
where
    T: StepValue,
{
    let five = T::from_u64(STEPS).expect("step count fits every supported domain");
    T::MAX / five
}

fn overflow_rows<T>()
where
    T: StepValue,
{
    let increment = fifth_of_max::<T>();
    let in_range = StepRequest::new(T::zero(), increment, STEPS);
    let past_max = StepRequest::new(T::zero(), increment, STEPS + 1);

    println!("{:<7} | {:<11} | {}", T::NAME, STEPS, describe(in_range.sum()));
    println!("{:<7} | {:<11} | {}", T::NAME, STEPS + 1, describe(past_max.sum()));
}

fn underflow_rows<T>()
where
    T: StepValue,
{
    let decrement = fifth_of_max::<T>();
    let in_range = StepRequest::new(T::MAX, decrement, STEPS);
    let past_min = StepRequest::new(T::MAX, decrement, STEPS + 1);

    println!("{:<7} | {:<11} | {}", T::NAME, STEPS, describe(in_range.difference()));
    println!(
        "{:<7} | {:<11} | {}",
        T::NAME,
        STEPS + 1,
        describe(past_min.difference())
    );
}

pub fn run_overflow_demos() {
    print_banner("Running Overflow Demonstrations");
    print_header();

    // signed integers
    overflow_rows::<i8>();
    overflow_rows::<i16>();
    overflow_rows::<i32>();
    overflow_rows::<i64>();
    overflow_rows::<i128>();
    overflow_rows::<isize>();

    // unsigned integers
    overflow_rows::<u8>();
    overflow_rows::<u16>();
    overflow_rows::<u32>();
    overflow_rows::<u64>();
    overflow_rows::<u128>();
    overflow_rows::<usize>();

    // real numbers
    overflow_rows::<f32>();
    overflow_rows::<f64>();
}

pub fn run_underflow_demos() {
    print_banner("Running Underflow Demonstrations");
    print_header();

    // signed integers
    underflow_rows::<i8>();
    underflow_rows::<i16>();
    underflow_rows::<i32>();
    underflow_rows::<i64>();
    underflow_rows::<i128>();
    underflow_rows::<isize>();

    // unsigned integers
    underflow_rows::<u8>();
    underflow_rows::<u16>();
    underflow_rows::<u32>();
    underflow_rows::<u64>();
    underflow_rows::<u128>();
    underflow_rows::<usize>();

    // real numbers
    underflow_rows::<f32>();
    underflow_rows::<f64>();
}

pub fn run_division_demos() {
    print_banner("Running Division Demonstrations");
    println!("{:<7} | {:<11} | {}", "Domain", "Divisor", "Outcome");
    println!("{}", "-".repeat(72));

    println!("{:<7} | {:<11} | {}", f32::NAME, 2.0, describe(divide(10.0f32, 2.0)));
    println!("{:<7} | {:<11} | {}", f32::NAME, 0.0, describe(divide(10.0f32, 0.0)));
    println!("{:<7} | {:<11} | {}", i32::NAME, 2, describe(divide(10i32, 2)));
    println!("{:<7} | {:<11} | {}", i32::NAME, 0, describe(divide(10i32, 0)));
}
