//! Built-in starter tree used when no stored tree can be loaded

use super::node::Node;

fn q(question: &str, yes: Node, no: Node) -> Node {
    Node::question(question, yes, no)
}

fn a(animal: &str) -> Node {
    Node::new(animal)
}

/// Starter tree of common domestic and garden animals.
pub fn animals() -> Node {
    let land = q(
        "Does it have fur or hair?",
        q(
            "Is it a household companion?",
            q("Is it loyal and social?", a("Dog"), a("Cat")),
            q("Is it small and usually kept in cages?", a("Hamster"), a("Rabbit")),
        ),
        q(
            "Does it have feathers?",
            q("Is it colorful or can mimic sounds?", a("Parrot"), a("Canary")),
            q("Is it raised for food or eggs?", a("Chicken"), a("Duck")),
        ),
    );

    let not_land = q(
        "Does it live mainly in water?",
        q(
            "Does it have fins?",
            q("Is it colorful and small?", a("Goldfish"), a("Koi Carp")),
            q("Is it slow-moving?", a("Turtle"), a("Frog")),
        ),
        q(
            "Does it have scales or a shell?",
            q(
                "Does it have legs?",
                q("Can it change color?", a("Chameleon"), a("Lizard")),
                q("Moves by slithering?", a("Snake"), a("Tortoise")),
            ),
            q(
                "Is it an insect?",
                q("Has colorful wings?", a("Butterfly"), a("Bee")),
                q("Has many legs?", a("Spider"), a("Ant")),
            ),
        ),
    );

    q("Does it live mostly on land?", land, not_land)
}
