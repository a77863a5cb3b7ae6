//! The builtin operation catalog.
//!
//! Operations are organized by category:
//! - `arithmetic`: arithmetic, aggregation, and kind conversion
//! - `math`: powers, roots, logarithms, trigonometry, unit conversion
//! - `bitwise`: bitwise logic and shifts over truncated integers
//! - `shuffle`: stack reordering
//! - `transfer`: primary/secondary stack transfer
//! - `heap`: addressed and fixed-slot heap access
//! - `output`: formatted emission through the output sink
//!
//! The catalog is a single static table assembled at compile time; the
//! registry indexes it by every synonym at construction.

mod arithmetic;
mod bitwise;
mod heap;
mod math;
mod output;
mod shuffle;
mod transfer;

use std::fmt;

use rpncalc_foundation::Result;

use crate::machine::Machine;

/// Signature shared by every builtin operation: the machine state and an
/// explicit output sink.
pub type OpFn = fn(&mut Machine, &mut dyn FnMut(String)) -> Result<()>;

/// A builtin operation: its invocation names and implementation.
pub struct Builtin {
    /// Invocation names; the first is the canonical name.
    pub names: &'static [&'static str],
    /// The operation body.
    pub func: OpFn,
}

impl fmt::Debug for Builtin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<builtin {}>", self.names[0])
    }
}

/// The full builtin catalog, in help-listing order.
pub(crate) const BUILTINS: &[Builtin] = &[
    // arithmetic
    Builtin { names: &["+"], func: arithmetic::add },
    Builtin { names: &["1+"], func: arithmetic::increment },
    Builtin { names: &["-"], func: arithmetic::subtract },
    Builtin { names: &["1-"], func: arithmetic::decrement },
    Builtin { names: &["x", "*"], func: arithmetic::multiply },
    Builtin { names: &["2x", "2*"], func: arithmetic::double },
    Builtin { names: &["/"], func: arithmetic::divide },
    Builtin { names: &["%", "mod"], func: arithmetic::modulo },
    Builtin { names: &["neg"], func: arithmetic::negate },
    Builtin { names: &["abs"], func: arithmetic::absolute },
    Builtin { names: &["inv"], func: arithmetic::reciprocal },
    Builtin { names: &["!", "fact"], func: arithmetic::factorial },
    Builtin { names: &["sum"], func: arithmetic::sum },
    Builtin { names: &["sumall"], func: arithmetic::sum_all },
    Builtin { names: &["product", "prod"], func: arithmetic::product },
    Builtin { names: &["productall", "prodall"], func: arithmetic::product_all },
    Builtin { names: &["to_i"], func: arithmetic::to_integer },
    Builtin { names: &["to_f", "to_r"], func: arithmetic::to_real },
    // math
    Builtin { names: &["sqr"], func: math::square },
    Builtin { names: &["**", "pow", "raise"], func: math::power },
    Builtin { names: &["sqrt"], func: math::square_root },
    Builtin { names: &["root"], func: math::root },
    Builtin { names: &["log"], func: math::common_log },
    Builtin { names: &["ln"], func: math::natural_log },
    Builtin { names: &["e"], func: math::euler },
    Builtin { names: &["pi"], func: math::pi },
    Builtin { names: &["dtor"], func: math::degrees_to_radians },
    Builtin { names: &["rtod"], func: math::radians_to_degrees },
    Builtin { names: &["sin"], func: math::sine },
    Builtin { names: &["asin"], func: math::arcsine },
    Builtin { names: &["cos"], func: math::cosine },
    Builtin { names: &["acos"], func: math::arccosine },
    Builtin { names: &["tan"], func: math::tangent },
    Builtin { names: &["atan"], func: math::arctangent },
    Builtin { names: &["ftoc"], func: math::fahrenheit_to_centigrade },
    Builtin { names: &["ctof"], func: math::centigrade_to_fahrenheit },
    // bitwise
    Builtin { names: &["&", "and"], func: bitwise::and },
    Builtin { names: &["&all", "andall"], func: bitwise::and_all },
    Builtin { names: &["|", "or"], func: bitwise::or },
    Builtin { names: &["|all", "orall"], func: bitwise::or_all },
    Builtin { names: &["^", "xor"], func: bitwise::xor },
    Builtin { names: &["^all", "xorall"], func: bitwise::xor_all },
    Builtin { names: &["~", "not"], func: bitwise::not },
    Builtin { names: &["<<", "shl"], func: bitwise::shift_left },
    Builtin { names: &[">>", "shr"], func: bitwise::shift_right },
    // shuffle
    Builtin { names: &["depth", "size"], func: shuffle::depth },
    Builtin { names: &["dup", "d"], func: shuffle::dup },
    Builtin { names: &["?dup", "nzdup"], func: shuffle::dup_if_nonzero },
    Builtin { names: &["2dup"], func: shuffle::dup_two },
    Builtin { names: &["swap", "s"], func: shuffle::swap },
    Builtin { names: &["2swap"], func: shuffle::swap_two },
    Builtin { names: &["rot"], func: shuffle::rotate },
    Builtin { names: &["-rot"], func: shuffle::rotate_back },
    Builtin { names: &["over"], func: shuffle::over },
    Builtin { names: &["2over"], func: shuffle::over_two },
    Builtin { names: &["drop"], func: shuffle::drop_top },
    Builtin { names: &["2drop"], func: shuffle::drop_two },
    Builtin { names: &["dropall", "clear"], func: shuffle::drop_all },
    Builtin { names: &["nip"], func: shuffle::nip },
    Builtin { names: &["tuck"], func: shuffle::tuck },
    // transfer
    Builtin { names: &["push"], func: transfer::to_secondary },
    Builtin { names: &["pop"], func: transfer::from_secondary },
    Builtin { names: &["xchg"], func: transfer::exchange },
    // heap
    Builtin { names: &["load"], func: heap::load },
    Builtin { names: &["store"], func: heap::store },
    Builtin { names: &["0load"], func: heap::load_slot_0 },
    Builtin { names: &["1load"], func: heap::load_slot_1 },
    Builtin { names: &["2load"], func: heap::load_slot_2 },
    Builtin { names: &["3load"], func: heap::load_slot_3 },
    Builtin { names: &["0store"], func: heap::store_slot_0 },
    Builtin { names: &["1store"], func: heap::store_slot_1 },
    Builtin { names: &["2store"], func: heap::store_slot_2 },
    Builtin { names: &["3store"], func: heap::store_slot_3 },
    // output
    Builtin { names: &["."], func: output::print },
    Builtin { names: &[".x"], func: output::print_hex },
    Builtin { names: &[".o"], func: output::print_octal },
    Builtin { names: &[".b"], func: output::print_binary },
    Builtin { names: &[".s"], func: output::dump_stack },
];
