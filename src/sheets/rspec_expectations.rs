//! RSpec Expectations 3.2 built-in matcher reference.
//!
//! One category covering the built-in matchers, with fenced Ruby examples
//! in the entry notes.

use crate::builder::DocumentBuilder;
use crate::document::Document;
use crate::error::BuildError;

fn entry(
    b: &mut DocumentBuilder,
    name: &str,
    commands: &[&str],
    notes: &str,
) -> Result<(), BuildError> {
    b.begin_entry()?;
    b.set_name(name)?;
    for command in commands {
        b.add_command(command)?;
    }
    b.set_notes(notes)?;
    b.end_entry()?;
    Ok(())
}

/// Runs the full declaration pass for the sheet.
///
/// # Errors
///
/// Returns [`BuildError`] if the declaration is structurally invalid;
/// for this compiled-in content that would be a programming error and is
/// covered by the registry tests.
#[allow(clippy::too_many_lines)]
pub fn build() -> Result<Document, BuildError> {
    let mut b = DocumentBuilder::new();
    b.begin_document()?;
    b.set_title("RSpec Expectations 3.2")?;
    b.set_docset_file_name("RSpec Expectations 3.2")?;
    b.set_keyword("rspec")?;
    b.set_introduction(
        "Each matcher can be used with `expect(..).to` or `expect(..).not_to` to define \
         positive and negative expectations respectively on an object. Most matchers can \
         also be accessed using the `(...).should` and `(...).should_not` syntax; see \
         [using should syntax](https://github.com/rspec/rspec-expectations/blob/master/Should.md) \
         for why we recommend using expect.",
    )?;

    b.begin_category("Built-in Matchers")?;

    entry(
        &mut b,
        "Object identity",
        &["be"],
        r#"```ruby
expect(actual).to be(expected) # passes if actual.equal?(expected)
```"#,
    )?;

    entry(
        &mut b,
        "Object equivalence",
        &["eq"],
        r#"```ruby
expect(actual).to eq(expected) # passes if actual == expected
```"#,
    )?;

    entry(
        &mut b,
        "Optional APIs for identity/equivalence",
        &["eql", "equal"],
        r#"```ruby
expect(actual).to eql(expected)   # passes if actual.eql?(expected)
expect(actual).to equal(expected) # passes if actual.equal?(expected)
```

> NOTE: `expect` does not support `==` matcher."#,
    )?;

    entry(
        &mut b,
        "Comparisons",
        &[
            "be >",
            "be >=",
            "be <=",
            "be <",
            "be_between",
            "match",
            "be_within .. of",
            "start_with",
            "end_with",
        ],
        r#"```ruby
expect(actual).to be >  expected
expect(actual).to be >= expected
expect(actual).to be <= expected
expect(actual).to be <  expected
expect(actual).to be_between(minimum, maximum).inclusive
expect(actual).to be_between(minimum, maximum).exclusive
expect(actual).to match(/expression/)
expect(actual).to be_within(delta).of(expected)
expect(actual).to start_with expected
expect(actual).to end_with expected
```

> NOTE: `expect` does not support `=~` matcher."#,
    )?;

    entry(
        &mut b,
        "Types/classes/response",
        &["be_instance_of", "be_kind_of", "respond_to"],
        r#"```ruby
expect(actual).to be_instance_of(expected)
expect(actual).to be_kind_of(expected)
expect(actual).to respond_to(expected)
```"#,
    )?;

    entry(
        &mut b,
        "Truthiness and existentialism",
        &["be_truthy", "be true", "be_falsey", "be false", "be_nil", "exist"],
        r#"```ruby
expect(actual).to be_truthy    # passes if actual is truthy (not nil or false)
expect(actual).to be true      # passes if actual == true
expect(actual).to be_falsey    # passes if actual is falsy (nil or false)
expect(actual).to be false     # passes if actual == false
expect(actual).to be_nil       # passes if actual is nil
expect(actual).to exist        # passes if actual.exist? and/or actual.exists? are truthy
expect(actual).to exist(*args) # passes if actual.exist?(*args) and/or actual.exists?(*args) are truthy
```"#,
    )?;

    entry(
        &mut b,
        "Expecting errors",
        &["raise_error"],
        r#"```ruby
expect { ... }.to raise_error
expect { ... }.to raise_error(ErrorClass)
expect { ... }.to raise_error("message")
expect { ... }.to raise_error(ErrorClass, "message")
```"#,
    )?;

    entry(
        &mut b,
        "Expecting throws",
        &["throw_symbol"],
        r#"```ruby
expect { ... }.to throw_symbol
expect { ... }.to throw_symbol(:symbol)
expect { ... }.to throw_symbol(:symbol, 'value')
```"#,
    )?;

    entry(
        &mut b,
        "Predicate matchers",
        &["be_*", "have_*"],
        r#"```ruby
expect(actual).to be_xxx         # passes if actual.xxx?
expect(actual).to have_xxx(:arg) # passes if actual.has_xxx?(:arg)
```

#### Examples

```ruby
expect([]).to      be_empty
expect(:a => 1).to have_key(:a)
```"#,
    )?;

    entry(
        &mut b,
        "Collection membership",
        &["include", "match_array", "contain_exactly"],
        r#"```ruby
expect(actual).to include(expected)
expect(array).to match_array(expected_array)
# ...which is the same as:
expect(array).to contain_exactly(individual, elements)
```

#### Examples

```ruby
expect([1, 2, 3]).to     include(1)
expect([1, 2, 3]).to     include(1, 2)
expect(:a => 'b').to     include(:a => 'b')
expect("this string").to include("is str")
expect([1, 2, 3]).to     contain_exactly(2, 1, 3)
expect([1, 2, 3]).to     match_array([3, 2, 1])
```"#,
    )?;

    entry(
        &mut b,
        "Ranges (1.9 only)",
        &["cover"],
        r#"```ruby
expect(1..10).to cover(3)
```"#,
    )?;

    entry(
        &mut b,
        "Change observation",
        &[
            "change .. from .. to",
            "change .. by",
            "change .. by_at_least",
            "change .. by_at_most",
        ],
        r#"```ruby
expect { object.action }.to change(object, :value).from(old).to(new)
expect { object.action }.to change(object, :value).by(delta)
expect { object.action }.to change(object, :value).by_at_least(minimum_delta)
expect { object.action }.to change(object, :value).by_at_most(maximum_delta)
```

#### Examples

```ruby
expect { a += 1 }.to change { a }.by(1)
expect { a += 3 }.to change { a }.from(2)
expect { a += 3 }.to change { a }.by_at_least(2)
```"#,
    )?;

    entry(
        &mut b,
        "Satisfy",
        &["satisfy"],
        r#"```ruby
expect(actual).to satisfy { |value| value == expected }
```"#,
    )?;

    entry(
        &mut b,
        "Output capture",
        &["output"],
        r#"```ruby
expect { actual }.to output("some output").to_stdout
expect { actual }.to output("some error").to_stderr
```"#,
    )?;

    entry(
        &mut b,
        "Block expectation",
        &[
            "yield_control",
            "yield_with_no_args",
            "yield_with_args",
            "yield_successive_args",
        ],
        r#"```ruby
expect { |b| object.action(&b) }.to yield_control
expect { |b| object.action(&b) }.to yield_with_no_args           # only matches no args
expect { |b| object.action(&b) }.to yield_with_args              # matches any args
expect { |b| object.action(&b) }.to yield_successive_args(*args) # matches args against multiple yields
```

#### Examples

```ruby
expect { |b| User.transaction(&b) }.to yield_control
expect { |b| User.transaction(&b) }.to yield_with_no_args
expect { |b| 5.tap(&b)            }.not_to yield_with_no_args         # because it yields with `5`
expect { |b| 5.tap(&b)            }.to yield_with_args(5)             # because 5 == 5
expect { |b| 5.tap(&b)            }.to yield_with_args(Fixnum)        # because Fixnum === 5
expect { |b| [1, 2, 3].each(&b)   }.to yield_successive_args(1, 2, 3)
```"#,
    )?;

    b.end_category()?;
    b.end_document()
}
