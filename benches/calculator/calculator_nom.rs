use nom::{
    branch::alt,
    character::complete::{char, multispace0, one_of},
    multi::{fold_many0, separated_list0},
    number::complete::double,
    sequence::{delimited, pair, preceded, terminated},
    IResult,
};

pub fn nom_parser(s: &str) -> Vec<f64> {
    program(s).map(|(_, values)| values).unwrap_or_default()
}

fn token<'a, O, F>(inner: F) -> impl FnMut(&'a str) -> IResult<&'a str, O>
where
    F: FnMut(&'a str) -> IResult<&'a str, O>,
{
    terminated(inner, multispace0)
}

fn factor(i: &str) -> IResult<&str, f64> {
    alt((
        token(double),
        delimited(token(char('(')), expression, token(char(')'))),
    ))(i)
}

fn term(i: &str) -> IResult<&str, f64> {
    let (i, first) = factor(i)?;
    fold_many0(
        pair(token(one_of("*/")), factor),
        move || first,
        |acc, (op, rhs)| if op == '*' { acc * rhs } else { acc / rhs },
    )(i)
}

fn expression(i: &str) -> IResult<&str, f64> {
    let (i, first) = term(i)?;
    fold_many0(
        pair(token(one_of("+-")), term),
        move || first,
        |acc, (op, rhs)| if op == '+' { acc + rhs } else { acc - rhs },
    )(i)
}

fn program(i: &str) -> IResult<&str, Vec<f64>> {
    preceded(multispace0, separated_list0(token(char(';')), expression))(i)
}
