use classic_collections::list::LinkedList;

use crate::init_logger;

#[quickcheck]
fn round_trip(xs: Vec<i8>) -> bool {
    LinkedList::create_list(xs.clone()).to_vec() == xs
}

#[quickcheck]
fn copy_is_independent(xs: Vec<i8>, extra: i8) -> bool {
    let list = LinkedList::from(xs.clone());
    let mut copy = list.clone();
    copy.append(extra);
    copy.remove_value(&extra);
    copy.pop_front();

    list.to_vec() == xs
}

#[quickcheck]
fn remove_last_drains_in_reverse(xs: Vec<i8>) -> bool {
    init_logger();
    let mut list = LinkedList::create_list(xs.clone());
    let mut model = xs;

    while list.remove_last() {
        model.pop();
        if list.to_vec() != model || list.back() != model.last() {
            return false;
        }
    }
    model.is_empty() && list.head().is_none() && list.tail().is_none()
}

#[quickcheck]
fn insert_around_every_node(xs: Vec<i8>) -> bool {
    let mut list = LinkedList::create_list(xs.clone());
    let nodes: Vec<_> = list.nodes().collect();
    for node in nodes {
        list.insert_before(node, 0);
        list.insert_after(node, 1);
    }

    let expected: Vec<i8> = xs.iter().flat_map(|&x| [0, x, 1]).collect();
    list.to_vec() == expected && list.len() == expected.len()
}

#[quickcheck]
fn remove_value_takes_first_match(xs: Vec<i8>, x: i8) -> bool {
    let mut list = LinkedList::create_list(xs.clone());
    let mut model = xs;
    let found = model.iter().position(|y| *y == x);
    if let Some(position) = found {
        model.remove(position);
    }

    list.remove_value(&x) == found.is_some() && list.to_vec() == model
}
