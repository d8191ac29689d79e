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

use clap::Parser;

/// Demonstrates range-checked stepping arithmetic across the primitive
/// numeric domains.
///
/// With no flags all three demonstrations run. The exit code is always 0;
/// the detected violations are the expected output, not failures.
#[derive(Debug, Parser)]
#[command(name = "stride", version, about)]
pub struct Cli {
    /// Run the overflow demonstrations.
    #[arg(long)]
    pub overflow: bool,

    /// Run the underflow demonstrations.
    #[arg(long)]
    pub underflow: bool,

    /// Run the division demonstrations.
    #[arg(long)]
    pub division: bool,
}

impl Cli {
    /// Returns `true` if no section was selected explicitly, in which case
    /// every demonstration runs.
    pub fn run_all(&self) -> bool {
        !(self.overflow || self.underflow || self.division)
    }
}
